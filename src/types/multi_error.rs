use crate::types::alloc_type::{String, Vec};
use crate::types::MessageVec;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, append-only accumulator of failure messages.
///
/// `MultiError` lets a validation pass run every check before reporting,
/// instead of failing fast on the first problem. Callers [`push`](Self::push)
/// one message per detected failure, then ask the accumulator whether
/// anything went wrong. A populated accumulator *is* the error value: it
/// implements [`Display`] (messages joined by newlines) and
/// [`core::error::Error`], so it can be returned wherever an ordinary error
/// is expected.
///
/// Messages are opaque text. Insertion order is preserved, duplicates are
/// kept, and nothing ever removes an entry — once populated, an accumulator
/// stays populated.
///
/// # Examples
///
/// ```
/// use error_ledger::MultiError;
///
/// let mut me = MultiError::new();
/// me.push("name must not be empty");
/// me.push("age must be positive");
///
/// assert!(me.has_failures().is_err());
/// assert_eq!(me.to_string(), "name must not be empty\nage must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiError {
    messages: MessageVec,
}

impl MultiError {
    /// Creates a new empty accumulator.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_ledger::MultiError;
    ///
    /// let me = MultiError::new();
    /// assert!(me.has_failures().is_ok());
    /// assert_eq!(me.to_string(), "");
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            messages: MessageVec::new(),
        }
    }

    /// Appends a failure message.
    ///
    /// Accepts any string, including the empty string; no validation or
    /// normalization is performed. This operation never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_ledger::MultiError;
    ///
    /// let mut me = MultiError::new();
    /// me.push("one");
    /// me.push(String::from("two"));
    /// assert_eq!(me.len(), 2);
    /// ```
    #[inline]
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Returns `Ok(())` if no failure was recorded, `Err(&self)` otherwise.
    ///
    /// This is the sole emptiness-as-success check: the returned error is
    /// the accumulator itself, carrying the full newline-joined message text
    /// through its [`Display`] impl.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_ledger::MultiError;
    ///
    /// let mut me = MultiError::new();
    /// assert!(me.has_failures().is_ok());
    ///
    /// me.push("boom");
    /// assert!(me.has_failures().is_err());
    /// ```
    #[inline]
    pub fn has_failures(&self) -> Result<(), &Self> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Consumes the accumulator, returning `Ok(())` when empty and
    /// `Err(self)` when populated.
    ///
    /// The owned counterpart of [`has_failures`](Self::has_failures),
    /// intended as the tail call of a validation function.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_ledger::MultiError;
    ///
    /// fn validate(name: &str) -> Result<(), MultiError> {
    ///     let mut me = MultiError::new();
    ///     if name.is_empty() {
    ///         me.push("name must not be empty");
    ///     }
    ///     me.into_result()
    /// }
    ///
    /// assert!(validate("alice").is_ok());
    /// assert!(validate("").is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<(), Self> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Consumes the accumulator, returning `Some(self)` when populated and
    /// `None` when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_ledger::MultiError;
    ///
    /// assert!(MultiError::new().err().is_none());
    ///
    /// let mut me = MultiError::new();
    /// me.push("boom");
    /// assert_eq!(me.err().map(|e| e.to_string()), Some("boom".to_string()));
    /// ```
    #[inline]
    pub fn err(self) -> Option<Self> {
        self.into_result().err()
    }

    /// Returns `true` if no message has been pushed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of recorded messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns an iterator over the messages in insertion order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, String> {
        self.messages.iter()
    }

    /// Returns the messages as a slice, in insertion order.
    #[inline]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consumes the accumulator and returns the underlying message storage.
    #[inline]
    pub fn into_messages(self) -> MessageVec {
        self.messages
    }
}

/// Renders the messages joined by a single `\n`, with no leading or trailing
/// separator. An empty accumulator renders as the empty string.
///
/// Messages containing embedded newlines are interleaved with the separator
/// verbatim; nothing is escaped.
impl Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut messages = self.messages.iter();
        if let Some(first) = messages.next() {
            f.write_str(first)?;
            for message in messages {
                f.write_str("\n")?;
                f.write_str(message)?;
            }
        }
        Ok(())
    }
}

impl core::error::Error for MultiError {}

impl From<Vec<String>> for MultiError {
    #[inline]
    fn from(messages: Vec<String>) -> Self {
        Self {
            messages: messages.into_iter().collect(),
        }
    }
}

impl From<MessageVec> for MultiError {
    #[inline]
    fn from(messages: MessageVec) -> Self {
        Self { messages }
    }
}

impl<S: Into<String>> Extend<S> for MultiError {
    #[inline]
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.messages.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for MultiError {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            messages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for MultiError {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
