// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate two or more `&str`s into a fresh `String`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let first: &str = $first;
        let mut out = ::std::string::String::with_capacity(first.len() $(+ $rest.len())+);
        out.push_str(first);
        $( out.push_str($rest); )+
        out
    }};
}
