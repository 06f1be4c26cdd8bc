// Shared geometry and interaction constants used by the core and the web frontend.

// Rods
pub const ROD_COUNT: usize = 13;
pub const ROD_SPACING: f32 = 2.0; // x distance between neighbouring rods
pub const ROD_RADIUS: f32 = 0.15;

// Frame
pub const FRAME_PADDING: f32 = 4.0; // extra width beyond the outermost rods
pub const FRAME_DEPTH: f32 = 2.0;
pub const BAR_THICKNESS: f32 = 1.0; // top/bottom bars and side posts
pub const DIVIDER_THICKNESS: f32 = 0.5;
pub const DIVIDER_DEPTH: f32 = 1.5;

// Free layout: five beads sliding over the whole rod
pub const FREE_BEADS_PER_ROD: usize = 5;
pub const FREE_BEAD_RADIUS: f32 = 0.6;
pub const FREE_BEAD_START_Y: f32 = 3.0; // topmost bead
pub const FREE_BEAD_SPACING_Y: f32 = -1.5;
pub const FREE_TRAVEL_LIMIT: f32 = 5.0; // beads stay within [-limit, limit]
pub const FREE_FRAME_TOP_Y: f32 = 6.0;
pub const FREE_FRAME_BOTTOM_Y: f32 = -6.0;

// Soroban layout: one heaven bead above the divider, four earth beads below
pub const SOROBAN_BEAD_RADIUS: f32 = 0.5;
pub const HEAVEN_HOME_Y: f32 = 5.2;
pub const HEAVEN_ACTIVE_Y: f32 = 3.1;
pub const HEAVEN_VALUE: u8 = 5;
pub const EARTH_BEADS_PER_ROD: usize = 4;
pub const EARTH_HOME_BOTTOM_Y: f32 = -5.5; // rank 0 at rest
pub const EARTH_ACTIVE_BOTTOM_Y: f32 = -1.65; // rank 0 pushed against the divider stack
pub const EARTH_VALUE: u8 = 1;
pub const SOROBAN_FRAME_TOP_Y: f32 = 6.2;
pub const SOROBAN_FRAME_BOTTOM_Y: f32 = -6.5;
pub const SOROBAN_DIVIDER_Y: f32 = 2.3;

// Bead spacing and snapping
pub const BEAD_GAP_MARGIN: f32 = 0.05; // added to the bead diameter to form the minimum gap
pub const SNAP_SLACK: f32 = 0.1; // tolerated overlap before a snap is refused

// Interaction
pub const ROTATION_SPEED: f32 = 0.005; // radians per pixel of pointer travel
pub const PITCH_LIMIT: f32 = 1.47; // just under pi/2
pub const PICK_RADIUS_PX: f32 = 40.0;
pub const HOVER_RADIUS_PX: f32 = 36.0;
pub const HOVER_SCALE: f32 = 1.15;
pub const CLICK_MIN_INTERVAL_SEC: f64 = 0.06;

// Camera
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 7.0]; // directional, points at the origin

// Palette (sRGB)
pub const BACKGROUND_RGB: [f32; 3] = [0.627, 0.322, 0.176]; // sienna
pub const WOOD_RGB: [f32; 3] = [0.545, 0.271, 0.075]; // saddle brown
pub const ROD_RGB: [f32; 3] = [0.667, 0.667, 0.667];
pub const BEAD_RGB: [f32; 3] = [0.824, 0.412, 0.118]; // chocolate
