//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! pixel buffer construction ([`BufferError`]) and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`BufferError`] - Errors creating or selecting pixel buffers
//! - [`Error`] - Runtime errors during display operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//!
//! Coordinates are never an error: pixels outside a buffer are ignored and
//! rectangles that leave the panel are clipped.
//!
//! ## Example
//!
//! ```
//! use uc1609::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Height must be a multiple of 8
//! let result = Dimensions::new(192, 60);
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum segment outputs (columns) driven by the UC1609
pub const MAX_COLUMNS: u16 = 192;

/// Maximum common outputs (rows) driven by the UC1609
///
/// NOTE: Must stay a multiple of 8; the page address register holds 0..=7.
pub const MAX_ROWS: u16 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (transport/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Source bitmap is shorter than its declared size
    ///
    /// A `w`-wide, `h`-tall source needs `w * ceil(h / 8)` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Width requested
        width: u16,
        /// Height requested
        height: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid dimensions {width}x{height} (max {MAX_COLUMNS}x{MAX_ROWS}, height must be multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// Errors creating or selecting pixel buffers
#[derive(Debug, PartialEq, Eq)]
pub enum BufferError {
    /// Zero-sized buffer, or height not a multiple of 8
    InvalidDimensions {
        /// Width requested
        width: u8,
        /// Height requested
        height: u8,
    },
    /// Backing storage shorter than `width * height / 8`
    TooSmall {
        /// Required size in bytes
        required: usize,
        /// Provided size in bytes
        provided: usize,
    },
    /// Multi-buffer index out of range
    NoSuchBuffer {
        /// Index requested
        index: usize,
        /// Number of buffers available
        count: usize,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "Invalid buffer dimensions {width}x{height} (height must be a non-zero multiple of 8)"
            ),
            Self::TooSmall { required, provided } => write!(
                f,
                "Buffer storage too small: required {required} bytes, provided {provided}"
            ),
            Self::NoSuchBuffer { index, count } => {
                write!(f, "No buffer at index {index} ({count} available)")
            }
        }
    }
}

impl core::error::Error for BufferError {}
