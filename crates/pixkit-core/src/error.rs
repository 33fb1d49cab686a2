//! Error types for pixkit operations.
//!
//! Every failure in the kernel is a programmer error: a format pair without
//! a defined formula, a deliberately deferred path, or a buffer geometry that
//! cannot hold the requested pixels. All of them are reported before any
//! output is written.
//!
//! # Usage
//!
//! ```rust
//! use pixkit_core::{Error, FormatCode, Result};
//!
//! fn check(src: FormatCode, dst: FormatCode) -> Result<()> {
//!     if !src.has_color() && dst.is_opaque() {
//!         return Err(Error::unsupported_conversion(src, dst));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(FormatCode::Alpha8, FormatCode::Bgr24).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - derive for [`std::error::Error`] and `Display`

use crate::format::FormatCode;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by conversion, interpolation and decode paths.
///
/// # Categories
///
/// - **Pair errors**: [`UnsupportedConversion`](Error::UnsupportedConversion),
///   [`NotImplemented`](Error::NotImplemented)
/// - **Identity errors**: [`UnknownFormatCode`](Error::UnknownFormatCode)
/// - **Geometry errors**: [`InvalidLayout`](Error::InvalidLayout)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The (source, destination) pair has no defined formula.
    ///
    /// Not recoverable by the kernel; the caller must pick a supported
    /// intermediate format.
    #[error("unsupported conversion from {src} to {dst}")]
    UnsupportedConversion {
        /// Source format
        src: FormatCode,
        /// Destination format
        dst: FormatCode,
    },

    /// A declared path that is deliberately not provided.
    ///
    /// Callers treat it like [`Error::UnsupportedConversion`].
    #[error("{what} is not implemented for {format}")]
    NotImplemented {
        /// Operation name
        what: &'static str,
        /// Format the operation was requested for
        format: FormatCode,
    },

    /// A raw numeric code does not name a cataloged format.
    #[error("unknown pixel format code {0}")]
    UnknownFormatCode(u16),

    /// Buffer geometry does not match the requested pixels.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

impl Error {
    /// Creates an [`Error::UnsupportedConversion`] error.
    #[inline]
    pub fn unsupported_conversion(src: FormatCode, dst: FormatCode) -> Self {
        Self::UnsupportedConversion { src, dst }
    }

    /// Creates an [`Error::NotImplemented`] error.
    #[inline]
    pub fn not_implemented(what: &'static str, format: FormatCode) -> Self {
        Self::NotImplemented { what, format }
    }

    /// Creates an [`Error::InvalidLayout`] error.
    #[inline]
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Self::InvalidLayout(msg.into())
    }

    /// Returns `true` if the error rejects a format pair or target.
    ///
    /// Both unsupported and not-implemented paths count; callers handle them
    /// the same way.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedConversion { .. } | Self::NotImplemented { .. }
        )
    }

    /// Returns `true` if this is a geometry error.
    #[inline]
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Self::InvalidLayout(_))
    }
}
