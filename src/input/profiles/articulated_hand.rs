//! Touch controllers presented as tracked hands.

use super::{Capabilities, ControllerProfile};
use crate::input::{
    DeviceInputType::{IndexFinger, Select, SpatialGrip, SpatialPointer, TriggerPress},
    Handedness, InteractionDef, RawSignal, SupportedControllerType,
};
use ovr::RawButton;

/// The index finger pose follows the controller's source pose rather than a fixed
/// zero pose, since Touch has no finger tracking to report.
pub static ARTICULATED_HAND: ControllerProfile = ControllerProfile {
    name: "oculus_touch_hand",
    controller_type: SupportedControllerType::OculusTouch,
    left: &LEFT,
    right: &RIGHT,
    capabilities: Capabilities::ARTICULATED_HAND,
};

static LEFT: [InteractionDef; 5] = [
    InteractionDef::pose(0, "Spatial Pointer", SpatialPointer),
    InteractionDef::pose(1, "Spatial Grip", SpatialGrip),
    InteractionDef::digital(
        2,
        "Select",
        Select,
        RawSignal::Button(RawButton::L_INDEX_TRIGGER),
    ),
    InteractionDef::digital(
        3,
        "Grab",
        TriggerPress,
        RawSignal::Button(RawButton::L_HAND_TRIGGER),
    ),
    InteractionDef::pose(4, "Index Finger Pose", IndexFinger),
];

static RIGHT: [InteractionDef; 5] = [
    InteractionDef::pose(0, "Spatial Pointer", SpatialPointer),
    InteractionDef::pose(1, "Spatial Grip", SpatialGrip),
    InteractionDef::digital(
        2,
        "Select",
        Select,
        RawSignal::Button(RawButton::R_INDEX_TRIGGER),
    ),
    InteractionDef::digital(
        3,
        "Grab",
        TriggerPress,
        RawSignal::Button(RawButton::R_HAND_TRIGGER),
    ),
    InteractionDef::pose(4, "Index Finger Pose", IndexFinger),
];

/// Hand shape inferred from which buttons the hand is holding down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum HandGesture {
    #[default]
    Open,
    Poke,
    ThumbsUp,
    Grab,
}

/// Reads `hand`'s index trigger, hand trigger and thumbstick click out of `buttons`.
///
/// Unhanded controllers have no fingers to read and always stay open.
pub fn classify_gesture(buttons: RawButton, hand: Handedness) -> HandGesture {
    let (index, grip, stick) = match hand {
        Handedness::Left => (
            RawButton::L_INDEX_TRIGGER,
            RawButton::L_HAND_TRIGGER,
            RawButton::L_THUMBSTICK,
        ),
        Handedness::Right => (
            RawButton::R_INDEX_TRIGGER,
            RawButton::R_HAND_TRIGGER,
            RawButton::R_THUMBSTICK,
        ),
        Handedness::Both | Handedness::Any => return HandGesture::Open,
    };

    match (
        buttons.contains(index),
        buttons.contains(grip),
        buttons.contains(stick),
    ) {
        (false, true, _) => HandGesture::Poke,
        (true, true, false) => HandGesture::ThumbsUp,
        (true, true, true) => HandGesture::Grab,
        _ => HandGesture::Open,
    }
}
