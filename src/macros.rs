// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, &str vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String concatenation shorthand, used for file names and status lines
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// `Vec<String>` from string literals (headers, fixtures).
#[macro_export]
macro_rules! strings {
    ($($item:expr),* $(,)?) => {
        vec![$(::std::string::String::from($item)),*]
    };
}
