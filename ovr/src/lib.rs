//! Raw Oculus runtime types.
//!
//! Layouts and bit values follow the native plugin so a real binding can hand its
//! snapshots over without translation.

use bitflags::bitflags;
use derive_more::TryFrom;
use glam::{Quat, Vec2, Vec3};

/// Analog value at which a trigger or stick direction also counts as a button press.
pub const AXIS_AS_BUTTON_THRESHOLD: f32 = 0.5;
/// Suggested radial deadzone for sticks and triggers.
pub const AXIS_DEADZONE_THRESHOLD: f32 = 0.2;

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Controller: u32 {
        const LTOUCH = 0x0000_0001;
        const RTOUCH = 0x0000_0002;
        const TOUCH = Self::LTOUCH.bits() | Self::RTOUCH.bits();
        const REMOTE = 0x0000_0004;
        const GAMEPAD = 0x0000_0010;
        const LTRACKED_REMOTE = 0x0100_0000;
        const RTRACKED_REMOTE = 0x0200_0000;
        const TOUCHPAD = 0x0800_0000;
    }
}

/// Every controller type the runtime can report, in resolution order.
pub const CONTROLLERS: [Controller; 8] = [
    Controller::TOUCH,
    Controller::LTOUCH,
    Controller::RTOUCH,
    Controller::REMOTE,
    Controller::GAMEPAD,
    Controller::TOUCHPAD,
    Controller::LTRACKED_REMOTE,
    Controller::RTRACKED_REMOTE,
];

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct RawButton: u32 {
        const A = 0x0000_0001;
        const B = 0x0000_0002;
        const R_THUMBSTICK = 0x0000_0004;
        const R_SHOULDER = 0x0000_0008;
        const L_THUMBSTICK_UP = 0x0000_0010;
        const L_THUMBSTICK_DOWN = 0x0000_0020;
        const L_THUMBSTICK_LEFT = 0x0000_0040;
        const L_THUMBSTICK_RIGHT = 0x0000_0080;
        const X = 0x0000_0100;
        const Y = 0x0000_0200;
        const L_THUMBSTICK = 0x0000_0400;
        const L_SHOULDER = 0x0000_0800;
        const R_THUMBSTICK_UP = 0x0000_1000;
        const R_THUMBSTICK_DOWN = 0x0000_2000;
        const R_THUMBSTICK_LEFT = 0x0000_4000;
        const R_THUMBSTICK_RIGHT = 0x0000_8000;
        const DPAD_UP = 0x0001_0000;
        const DPAD_DOWN = 0x0002_0000;
        const DPAD_LEFT = 0x0004_0000;
        const DPAD_RIGHT = 0x0008_0000;
        const START = 0x0010_0000;
        const BACK = 0x0020_0000;
        const R_INDEX_TRIGGER = 0x0400_0000;
        const R_HAND_TRIGGER = 0x0800_0000;
        const L_INDEX_TRIGGER = 0x1000_0000;
        const L_HAND_TRIGGER = 0x2000_0000;
        const L_TOUCHPAD = 0x4000_0000;
        const R_TOUCHPAD = 0x8000_0000;
    }
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct RawTouch: u32 {
        const A = 0x0000_0001;
        const B = 0x0000_0002;
        const R_THUMBSTICK = 0x0000_0004;
        const R_THUMB_REST = 0x0000_0008;
        const R_INDEX_TRIGGER = 0x0000_0010;
        const X = 0x0000_0100;
        const Y = 0x0000_0200;
        const L_THUMBSTICK = 0x0000_0400;
        const L_THUMB_REST = 0x0000_0800;
        const L_INDEX_TRIGGER = 0x0000_1000;
        const L_TOUCHPAD = 0x4000_0000;
        const R_TOUCHPAD = 0x8000_0000;
    }
}

bitflags! {
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct RawNearTouch: u32 {
        const L_INDEX_TRIGGER = 0x0000_0001;
        const L_THUMB_BUTTONS = 0x0000_0002;
        const R_INDEX_TRIGGER = 0x0000_0004;
        const R_THUMB_BUTTONS = 0x0000_0008;
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFrom)]
#[try_from(repr)]
#[repr(u32)]
pub enum RawAxis1D {
    LIndexTrigger = 0x01,
    RIndexTrigger = 0x02,
    LHandTrigger = 0x04,
    RHandTrigger = 0x08,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFrom)]
#[try_from(repr)]
#[repr(u32)]
pub enum RawAxis2D {
    LThumbstick = 0x01,
    RThumbstick = 0x02,
    LTouchpad = 0x04,
    RTouchpad = 0x08,
}

/// Tracked nodes the runtime can locate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, TryFrom)]
#[try_from(repr)]
#[repr(i32)]
pub enum Node {
    None = -1,
    EyeLeft = 0,
    EyeRight = 1,
    EyeCenter = 2,
    HandLeft = 3,
    HandRight = 4,
}

/// Which prediction step node poses are sampled for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum Step {
    #[default]
    Render = -1,
    Physics = 0,
}

/// A pose in the runtime's right-handed tracking space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Posef {
    pub orientation: Quat,
    pub position: Vec3,
}

impl Posef {
    pub const IDENTITY: Self = Self {
        orientation: Quat::IDENTITY,
        position: Vec3::ZERO,
    };
}

impl Default for Posef {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// One poll of a controller's raw input state.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ControllerState {
    pub connected_controllers: Controller,
    pub buttons: RawButton,
    pub touches: RawTouch,
    pub near_touches: RawNearTouch,
    pub l_index_trigger: f32,
    pub r_index_trigger: f32,
    pub l_hand_trigger: f32,
    pub r_hand_trigger: f32,
    pub l_thumbstick: Vec2,
    pub r_thumbstick: Vec2,
    pub l_touchpad: Vec2,
    pub r_touchpad: Vec2,
}

impl ControllerState {
    pub fn axis_1d(&self, axis: RawAxis1D) -> f32 {
        match axis {
            RawAxis1D::LIndexTrigger => self.l_index_trigger,
            RawAxis1D::RIndexTrigger => self.r_index_trigger,
            RawAxis1D::LHandTrigger => self.l_hand_trigger,
            RawAxis1D::RHandTrigger => self.r_hand_trigger,
        }
    }

    pub fn axis_2d(&self, axis: RawAxis2D) -> Vec2 {
        match axis {
            RawAxis2D::LThumbstick => self.l_thumbstick,
            RawAxis2D::RThumbstick => self.r_thumbstick,
            RawAxis2D::LTouchpad => self.l_touchpad,
            RawAxis2D::RTouchpad => self.r_touchpad,
        }
    }
}

/// The native runtime as seen by the input layer.
///
/// Every call is a synchronous query of the latest state; implementations do not block.
pub trait OvrRuntime {
    fn controller_state(&self, controller: Controller) -> ControllerState;
    fn connected_controllers(&self) -> Controller;
    fn active_controller(&self) -> Controller;

    fn node_position_tracked(&self, node: Node) -> bool;
    /// True when the reported position is valid but may be approximate.
    fn node_position_valid(&self, node: Node) -> bool;
    fn node_orientation_tracked(&self, node: Node) -> bool;
    fn node_pose(&self, node: Node, step: Step) -> Posef;
}

/// Whether `controller_type` should get its own input source given the `connected` mask.
///
/// When both Touch controllers are connected only the combined [`Controller::TOUCH`] type
/// resolves, so the individual halves are rejected.
pub fn should_resolve_controller(controller_type: Controller, connected: Controller) -> bool {
    let mut valid = !controller_type.is_empty() && connected.contains(controller_type);

    if connected.contains(Controller::TOUCH)
        && controller_type.intersects(Controller::TOUCH)
        && !controller_type.contains(Controller::TOUCH)
    {
        valid = false;
    }

    valid
}
