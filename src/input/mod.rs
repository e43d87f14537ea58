pub mod analog;
pub mod controller;
pub mod devices;
pub mod edge;
pub mod interaction;
pub mod profiles;
pub mod promotion;


use derive_more::{Deref, From};
use glam::{Quat, Vec2, Vec3};
use ovr::Posef;
use std::collections::VecDeque;

pub use controller::OculusController;
pub use devices::SessionId;
pub use interaction::{Interaction, InteractionDef, InteractionValue, RawSignal};
pub use profiles::ControllerProfile;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
    Both,
    Any,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum TrackingState {
    #[default]
    NotTracked,
    Tracked,
    NotApplicable,
}

/// Controller families the input system knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SupportedControllerType {
    OculusTouch,
    OculusRemote,
    GenericOpenVr,
}

/// Identifies the abstract action an interaction drives. Zero means unassigned.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Deref, From)]
pub struct InputActionId(pub u32);

impl InputActionId {
    pub const NONE: Self = Self(0);
}

/// A pose in the input system's left-handed space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const ZERO_IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::ZERO_IDENTITY
    }
}

impl From<Posef> for Pose {
    /// Flips the z axis to go from the runtime's right-handed space to a left-handed one.
    fn from(pose: Posef) -> Self {
        let Posef {
            orientation: o,
            position: p,
        } = pose;
        Self {
            position: Vec3::new(p.x, p.y, -p.z),
            rotation: Quat::from_xyzw(-o.x, -o.y, o.z, o.w),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AxisType {
    None,
    Digital,
    SingleAxis,
    DualAxis,
    SixDof,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DeviceInputType {
    None,
    SpatialPointer,
    SpatialGrip,
    IndexFinger,
    Select,
    Menu,
    ButtonPress,
    ButtonTouch,
    ButtonNearTouch,
    Trigger,
    TriggerPress,
    TriggerTouch,
    TriggerNearTouch,
    ThumbTouch,
    ThumbNearTouch,
    ThumbStick,
    ThumbStickPress,
    ThumbStickTouch,
    ThumbStickNearTouch,
    Touchpad,
    TouchpadPress,
    TouchpadTouch,
    TouchpadNearTouch,
    DirectionalPad,
    Hotkey,
}

/// How a channel's value is derived each tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChannelKind {
    Ignored,
    Pose,
    Press,
    Touch,
    NearTouch,
    SingleAxis,
    DualAxis,
    Unsupported,
}

impl DeviceInputType {
    pub fn channel_kind(self) -> ChannelKind {
        use DeviceInputType::*;
        match self {
            None => ChannelKind::Ignored,
            SpatialPointer | SpatialGrip | IndexFinger => ChannelKind::Pose,
            Select | Menu | ButtonPress | TriggerPress | ThumbStickPress => ChannelKind::Press,
            ButtonTouch | TriggerTouch | ThumbTouch | TouchpadTouch | ThumbStickTouch => {
                ChannelKind::Touch
            }
            ButtonNearTouch | TriggerNearTouch | ThumbNearTouch | TouchpadNearTouch
            | ThumbStickNearTouch => ChannelKind::NearTouch,
            Trigger => ChannelKind::SingleAxis,
            ThumbStick | Touchpad => ChannelKind::DualAxis,
            TouchpadPress | DirectionalPad | Hotkey => ChannelKind::Unsupported,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    SourceDetected {
        source: SessionId,
        handedness: Handedness,
    },
    SourceLost {
        source: SessionId,
        handedness: Handedness,
    },
    TrackingStateChanged {
        source: SessionId,
        state: TrackingState,
    },
    SourcePoseChanged {
        source: SessionId,
        pose: Pose,
    },
    SourcePositionChanged {
        source: SessionId,
        position: Vec3,
    },
    SourceRotationChanged {
        source: SessionId,
        rotation: Quat,
    },
    InputDown {
        source: SessionId,
        handedness: Handedness,
        action: InputActionId,
        interaction: u32,
    },
    InputUp {
        source: SessionId,
        handedness: Handedness,
        action: InputActionId,
        interaction: u32,
    },
    FloatChanged {
        source: SessionId,
        handedness: Handedness,
        action: InputActionId,
        interaction: u32,
        value: f32,
    },
    PositionChanged {
        source: SessionId,
        handedness: Handedness,
        action: InputActionId,
        interaction: u32,
        value: Vec2,
    },
    PoseChanged {
        source: SessionId,
        handedness: Handedness,
        action: InputActionId,
        interaction: u32,
        pose: Pose,
    },
}

impl InputEvent {
    pub fn source(&self) -> SessionId {
        match *self {
            InputEvent::SourceDetected { source, .. }
            | InputEvent::SourceLost { source, .. }
            | InputEvent::TrackingStateChanged { source, .. }
            | InputEvent::SourcePoseChanged { source, .. }
            | InputEvent::SourcePositionChanged { source, .. }
            | InputEvent::SourceRotationChanged { source, .. }
            | InputEvent::InputDown { source, .. }
            | InputEvent::InputUp { source, .. }
            | InputEvent::FloatChanged { source, .. }
            | InputEvent::PositionChanged { source, .. }
            | InputEvent::PoseChanged { source, .. } => source,
        }
    }
}

/// Receives every event the provider raises.
pub trait InputSink {
    fn raise(&mut self, event: InputEvent);
}

impl InputSink for VecDeque<InputEvent> {
    fn raise(&mut self, event: InputEvent) {
        self.push_back(event);
    }
}

impl InputSink for Vec<InputEvent> {
    fn raise(&mut self, event: InputEvent) {
        self.push(event);
    }
}
