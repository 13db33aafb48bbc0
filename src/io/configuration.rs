//! Rendering constants and runtime configuration defaults

// Output raster dimensions
/// Canvas width in pixels
pub const CANVAS_WIDTH: u32 = 800;
/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 800;

// Iteration schedule: frames below each bound use the paired depth
/// Frame index bounds (exclusive) and the subdivision depth used below each
pub const DEFAULT_SCHEDULE_STEPS: [(usize, usize); 4] = [(50, 4), (100, 5), (150, 6), (200, 7)];
/// Depth used for every frame at or past the last bound
pub const DEFAULT_FINAL_DEPTH: usize = 8;

// Safety limit to prevent excessive memory allocation (~10^6 triangles at depth 12)
/// Maximum allowed subdivision depth
pub const MAX_SUBDIVISION_DEPTH: usize = 12;

/// Number of triangles in the initial wheel
pub const WHEEL_TRIANGLES: usize = 10;

// Luminance sampling
/// Fractions along each rhombus edge at which interior samples are taken
pub const SAMPLE_OFFSETS: [f64; 3] = [0.25, 0.5, 0.75];
/// Mean luminance above which a tile is filled white
pub const LUMINANCE_THRESHOLD: f64 = 128.0;

// Stroke styling
/// Stroke width as a fraction of the first triangle's A–B edge length
pub const STROKE_WIDTH_RATIO: f64 = 0.1;
/// Tile outline colour
pub const STROKE_COLOR: [u8; 4] = [128, 128, 128, 255];
/// Fill for tiles over bright source regions
pub const WHITE_FILL: [u8; 4] = [255, 255, 255, 255];
/// Fill for tiles over dark source regions
pub const BLACK_FILL: [u8; 4] = [0, 0, 0, 255];
/// Raster background behind the tiling
pub const BACKGROUND_COLOR: [u8; 4] = [0, 0, 0, 0];

// Frame naming, e.g. `a_000123.png`
/// Default source and output file name prefix
pub const DEFAULT_FRAME_PREFIX: &str = "a_";
/// Default zero-padded width of the frame index
pub const DEFAULT_INDEX_DIGITS: usize = 6;
/// Source frame file extension
pub const SOURCE_EXTENSION: &str = "png";
/// Raster output file extension
pub const RASTER_EXTENSION: &str = "png";
/// Vector intermediate file extension
pub const VECTOR_EXTENSION: &str = "svg";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
