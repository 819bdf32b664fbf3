// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! svec {
    // Vec<String> from string literals: svec!["剧情", "犯罪"]
    () => {
        ::std::vec::Vec::<::std::string::String>::new()
    };
    ($($item:expr),+ $(,)?) => {
        vec![$(::std::string::String::from($item)),+]
    };
}
