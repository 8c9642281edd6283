//! Display configuration types and builder

use crate::command::{
    ADDRESS_SET, BIAS_RATIO_SET, FRAMERATE_SET, PC_SET, ROTATION_FLIP_ONE, ROTATION_FLIP_THREE,
    ROTATION_FLIP_TWO, ROTATION_NORMAL, TEMP_COMP_SET,
};
pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Display dimensions
///
/// The controller organizes RAM in pages of 8 rows, so the height must be
/// a multiple of 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub width: u16,
    /// Number of rows (height in pixels, corresponds to common outputs)
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - width is 0 or > MAX_COLUMNS
    /// - height is 0 or > MAX_ROWS
    /// - height % 8 != 0 (must be page-aligned)
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        if height == 0 || height > MAX_ROWS || height % 8 != 0 {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u16 {
        self.height / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.width as usize * self.pages() as usize
    }
}

/// Panel orientation, as set by the LCD mapping control register
///
/// The controller mirrors rows and columns in hardware; the buffer layout
/// never changes. After mirroring X, redraw so the RAM matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Native orientation of the panel
    #[default]
    Normal,
    /// Segment (column) mirror
    FlipOne,
    /// Common (row) mirror
    FlipTwo,
    /// Both mirrors
    FlipThree,
}

impl Orientation {
    /// Register value for LCD_CONTROL
    pub fn bits(self) -> u8 {
        match self {
            Self::Normal => ROTATION_NORMAL,
            Self::FlipOne => ROTATION_FLIP_ONE,
            Self::FlipTwo => ROTATION_FLIP_TWO,
            Self::FlipThree => ROTATION_FLIP_THREE,
        }
    }

    /// Decode a raw LC[2:1] value
    ///
    /// Only 0x00, 0x02, 0x04 and 0x06 are meaningful; any other value
    /// falls back to [`Orientation::Normal`].
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            ROTATION_FLIP_THREE => Self::FlipThree,
            ROTATION_FLIP_ONE => Self::FlipOne,
            ROTATION_FLIP_TWO => Self::FlipTwo,
            _ => Self::Normal,
        }
    }
}

/// Display configuration
///
/// Register values written during initialization. Use `Builder` to
/// create a Config; the defaults suit the ERM19264 module.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Orientation programmed at the end of initialization
    pub orientation: Orientation,
    /// Temperature compensation parameter
    pub temp_comp: u8,
    /// RAM address control parameter
    pub address_control: u8,
    /// Frame rate parameter
    pub frame_rate: u8,
    /// Bias ratio parameter
    pub bias_ratio: u8,
    /// Power control parameter
    pub power_control: u8,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use uc1609::{Builder, Dimensions, Orientation};
///
/// let dims = match Dimensions::new(192, 64) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = match Builder::new()
///     .dimensions(dims)
///     .orientation(Orientation::FlipTwo)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    orientation: Orientation,
    temp_comp: u8,
    address_control: u8,
    frame_rate: u8,
    bias_ratio: u8,
    power_control: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            orientation: Orientation::Normal,
            temp_comp: TEMP_COMP_SET,
            address_control: ADDRESS_SET,
            frame_rate: FRAMERATE_SET,
            bias_ratio: BIAS_RATIO_SET,
            power_control: PC_SET,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set the orientation applied by initialization
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set temperature compensation
    pub fn temp_comp(mut self, value: u8) -> Self {
        self.temp_comp = value;
        self
    }

    /// Set RAM address control
    pub fn address_control(mut self, value: u8) -> Self {
        self.address_control = value;
        self
    }

    /// Set frame rate
    pub fn frame_rate(mut self, value: u8) -> Self {
        self.frame_rate = value;
        self
    }

    /// Set bias ratio
    pub fn bias_ratio(mut self, value: u8) -> Self {
        self.bias_ratio = value;
        self
    }

    /// Set power control
    pub fn power_control(mut self, value: u8) -> Self {
        self.power_control = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set
    pub fn build(self) -> Result<Config, BuilderError> {
        Ok(Config {
            dimensions: self.dimensions.ok_or(BuilderError::MissingDimensions)?,
            orientation: self.orientation,
            temp_comp: self.temp_comp,
            address_control: self.address_control,
            frame_rate: self.frame_rate,
            bias_ratio: self.bias_ratio,
            power_control: self.power_control,
        })
    }
}
