// std::borrow::Cow

/// Takes the string out of a `Cow` produced by `Regex::replace_all`,
/// or yields `$default` when the regex matched nothing and the `Cow`
/// still borrows it.
///
/// Lets the formatter move its buffer through the whitespace collapse
/// without an extra copy when the template has no whitespace runs.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;
