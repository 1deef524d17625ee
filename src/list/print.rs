//! Delimited printing of lazy lists.

use std::fmt::{self, Display, Write};

use super::node::LazyList;
use crate::error::ListResult;

/// Delimiters used by [`LazyList::print_with`].
///
/// The defaults render `[1, 2, 3]` as `[^1; 2; 3^]`.
///
/// # Examples
///
/// ```rust
/// use lazylist::list::{LazyList, PrintOptions};
///
/// let options = PrintOptions::default().with_prefix("<").with_suffix(">").with_separator(",");
/// let text = LazyList::range(1, 3).to_string_with(&options).unwrap();
/// assert_eq!(text, "<1,2,3>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Written before the first element.
    pub prefix: String,
    /// Written after the last element.
    pub suffix: String,
    /// Written between consecutive elements.
    pub separator: String,
}

impl PrintOptions {
    /// Replaces the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replaces the suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replaces the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            prefix: "[^".to_string(),
            suffix: "^]".to_string(),
            separator: "; ".to_string(),
        }
    }
}

impl<T: Clone + 'static> LazyList<T> {
    /// Writes the list to `output`, each element rendered by `printer`.
    ///
    /// Elements are forced one at a time as they are printed. If forcing
    /// fails, whatever was printed so far stays in `output` and the suffix
    /// is not written.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing, or
    /// [`ListError::Format`](crate::error::ListError::Format) if `output`
    /// rejects a write.
    pub fn print_with<W, P>(&self, output: &mut W, options: &PrintOptions, mut printer: P) -> ListResult<()>
    where
        W: Write,
        P: FnMut(&mut W, &T) -> fmt::Result,
    {
        output.write_str(&options.prefix)?;
        let mut first = true;
        for element in self {
            let element = element?;
            if !first {
                output.write_str(&options.separator)?;
            }
            printer(output, &element)?;
            first = false;
        }
        output.write_str(&options.suffix)?;
        Ok(())
    }
}

impl<T: Display + Clone + 'static> LazyList<T> {
    /// Renders the list to a string using each element's `Display`.
    ///
    /// # Errors
    ///
    /// Propagates a failure met while forcing.
    pub fn to_string_with(&self, options: &PrintOptions) -> ListResult<String> {
        let mut output = String::new();
        self.print_with(&mut output, options, |output, element| write!(output, "{element}"))?;
        Ok(output)
    }
}
