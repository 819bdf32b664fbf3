// src/cli.rs
use std::{env, error::Error, path::Path};

use crate::{
    config::{consts::{MAX_PAGES, PAGE_SIZE}, options::AppOptions},
    extract::EmptyGenre,
    file,
    progress::PrintProgress,
    report,
    runner::{self, Source},
};

/// Parsed command line: options plus the flags that steer the run itself.
#[derive(Debug, Default)]
pub struct Params {
    pub options: AppOptions,
    pub source: Option<Source>,
    pub log_level: Option<String>,
    pub help: bool,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    if params.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    crate::logging::init(crate::logging::resolve_level(params.log_level.as_deref()));

    let opts = &params.options;
    let source = params.source.unwrap_or(Source::Remote);
    let mut progress = PrintProgress;
    let summary = runner::run(opts, source, Some(&mut progress))?;

    if source == Source::Remote {
        if !summary.scrape.pages_failed.is_empty() {
            println!("失败页: {:?}", summary.scrape.pages_failed);
        }
        if summary.scrape.items_skipped > 0 {
            println!("跳过无法解析的条目: {}", summary.scrape.items_skipped);
        }
        if let Some(p) = summary.files_written.first() {
            println!("数据已保存为 {}", p.display());
        }
        println!("爬取完成，共获取{}部电影数据", summary.record_count());
    }

    match &summary.report {
        Some(rep) => {
            print!("{}", report::render_text(rep, opts.scrape.expected_items()));
            println!("\n生成图表...");
            for p in summary.files_written.iter().skip(usize::from(source == Source::Remote)) {
                println!("✓ 已保存 {}", p.display());
            }
            println!("\n分析完成");
        }
        None => println!("爬取失败，请检查网络连接"),
    }
    Ok(())
}

pub fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let opts = &mut params.options;

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--pages" => {
                let v: u32 = next_value(&mut args, &a)?.parse()?;
                if v == 0 || v > MAX_PAGES {
                    return Err(format!("Page count out of range (1..={MAX_PAGES})").into());
                }
                opts.scrape.pages = v; }
            "--page-size" => {
                let v: u32 = next_value(&mut args, &a)?.parse()?;
                if v == 0 || v > PAGE_SIZE {
                    return Err(format!("Page size out of range (1..={PAGE_SIZE})").into());
                }
                opts.scrape.page_size = v; }
            "--workers" => opts.scrape.workers = next_value(&mut args, &a)?.parse::<usize>()?.max(1),
            "--pause-ms" => opts.scrape.pause_ms = next_value(&mut args, &a)?.parse()?,
            "--from-cache" => params.source = Some(Source::Cache),
            "--empty-genre" => {
                let v = next_value(&mut args, &a)?;
                opts.extract.empty_genre = match v.to_ascii_lowercase().as_str() {
                    "keep" => EmptyGenre::Keep,
                    "default" => EmptyGenre::Default,
                    other => return Err(format!("Unknown --empty-genre policy: {}", other).into()),
                };}
            "-o" | "--out" => opts.export.set_out_dir(&next_value(&mut args, &a)?),
            "--json" => opts.export.json_file = file_value(&mut args, &a)?,
            "--report" => opts.export.report_file = file_value(&mut args, &a)?,
            "--chart" => opts.export.chart_file = file_value(&mut args, &a)?,
            "--no-chart" => opts.export.write_chart = false,
            "--no-cache" => opts.export.save_cache = false,
            "--top-actors" => opts.report.top_actors = next_value(&mut args, &a)?.parse()?,
            "--top-directors" => opts.report.top_directors = next_value(&mut args, &a)?.parse()?,
            "--top-countries" => opts.report.top_countries = next_value(&mut args, &a)?.parse()?,
            "--top-genres" => opts.report.top_genres = next_value(&mut args, &a)?.parse()?,
            "--log-level" => params.log_level = Some(next_value(&mut args, &a)?),
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, Box<dyn Error>> {
    args.next().ok_or_else(|| format!("Missing value for {}", flag).into())
}

// File-name flags; a trailing separator means the user meant a directory.
fn file_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, Box<dyn Error>> {
    let v = next_value(args, flag)?;
    if file::looks_like_dir_hint(Path::new(&v)) {
        return Err(format!("{} expects a file name, got directory {} (use -o for the output dir)", flag, v).into());
    }
    Ok(v)
}
