use super::{Capabilities, ControllerProfile};
use crate::input::{
    DeviceInputType::{
        ButtonPress, ButtonTouch, Menu, SpatialPointer, ThumbNearTouch, ThumbStick,
        ThumbStickPress, ThumbStickTouch, ThumbTouch, Trigger, TriggerNearTouch, TriggerPress,
        TriggerTouch,
    },
    InteractionDef, RawSignal, SupportedControllerType,
};
use ovr::{RawAxis1D, RawAxis2D, RawButton, RawNearTouch, RawTouch};

pub static TOUCH: ControllerProfile = ControllerProfile {
    name: "oculus_touch",
    controller_type: SupportedControllerType::OculusTouch,
    left: &LEFT,
    right: &RIGHT,
    capabilities: Capabilities::empty(),
};

static LEFT: [InteractionDef; 17] = [
    InteractionDef::pose(0, "Spatial Pointer", SpatialPointer),
    InteractionDef::single_axis(1, "Trigger", Trigger, RawAxis1D::LIndexTrigger),
    InteractionDef::digital(
        2,
        "Trigger Touch",
        TriggerTouch,
        RawSignal::Touch(RawTouch::L_INDEX_TRIGGER),
    ),
    InteractionDef::digital(
        3,
        "Trigger Near Touch",
        TriggerNearTouch,
        RawSignal::NearTouch(RawNearTouch::L_INDEX_TRIGGER),
    ),
    InteractionDef::digital(
        4,
        "Trigger Press",
        TriggerPress,
        RawSignal::Button(RawButton::L_INDEX_TRIGGER),
    ),
    InteractionDef::single_axis(5, "HandTrigger Press", Trigger, RawAxis1D::LHandTrigger),
    InteractionDef::dual_axis(6, "Thumbstick", ThumbStick, RawAxis2D::LThumbstick),
    InteractionDef::digital(
        7,
        "Thumbstick Touch",
        ThumbStickTouch,
        RawSignal::Touch(RawTouch::L_THUMBSTICK),
    ),
    InteractionDef::digital(
        8,
        "Thumbstick Press",
        ThumbStickPress,
        RawSignal::Button(RawButton::L_THUMBSTICK),
    ),
    InteractionDef::digital(
        9,
        "Thumb Near Touch",
        ThumbNearTouch,
        RawSignal::NearTouch(RawNearTouch::L_THUMB_BUTTONS),
    ),
    InteractionDef::digital(10, "X Button Press", ButtonPress, RawSignal::Button(RawButton::X)),
    InteractionDef::digital(11, "Y Button Press", ButtonPress, RawSignal::Button(RawButton::Y)),
    InteractionDef::digital(12, "X Button Touch", ButtonTouch, RawSignal::Touch(RawTouch::X)),
    InteractionDef::digital(13, "Y Button Touch", ButtonTouch, RawSignal::Touch(RawTouch::Y)),
    InteractionDef::digital(14, "Start Press", Menu, RawSignal::Button(RawButton::START)),
    InteractionDef::digital(
        15,
        "PrimaryThumbRest Touch",
        ThumbTouch,
        RawSignal::Touch(RawTouch::L_THUMB_REST),
    ),
    InteractionDef::digital(
        16,
        "PrimaryThumbRest Near Touch",
        ThumbNearTouch,
        RawSignal::NearTouch(RawNearTouch::L_THUMB_BUTTONS),
    ),
];

static RIGHT: [InteractionDef; 16] = [
    InteractionDef::pose(0, "Spatial Pointer", SpatialPointer),
    InteractionDef::single_axis(1, "Trigger", Trigger, RawAxis1D::RIndexTrigger),
    InteractionDef::digital(
        2,
        "Trigger Touch",
        TriggerTouch,
        RawSignal::Touch(RawTouch::R_INDEX_TRIGGER),
    ),
    InteractionDef::digital(
        3,
        "Trigger Near Touch",
        TriggerNearTouch,
        RawSignal::NearTouch(RawNearTouch::R_INDEX_TRIGGER),
    ),
    InteractionDef::digital(
        4,
        "Trigger Press",
        TriggerPress,
        RawSignal::Button(RawButton::R_INDEX_TRIGGER),
    ),
    InteractionDef::single_axis(5, "HandTrigger Press", Trigger, RawAxis1D::RHandTrigger),
    InteractionDef::dual_axis(6, "Thumbstick", ThumbStick, RawAxis2D::RThumbstick),
    InteractionDef::digital(
        7,
        "Thumbstick Touch",
        ThumbStickTouch,
        RawSignal::Touch(RawTouch::R_THUMBSTICK),
    ),
    InteractionDef::digital(
        8,
        "Thumbstick Press",
        ThumbStickPress,
        RawSignal::Button(RawButton::R_THUMBSTICK),
    ),
    InteractionDef::digital(
        9,
        "Thumb Near Touch",
        ThumbNearTouch,
        RawSignal::NearTouch(RawNearTouch::R_THUMB_BUTTONS),
    ),
    InteractionDef::digital(10, "A Button Press", ButtonPress, RawSignal::Button(RawButton::A)),
    InteractionDef::digital(11, "B Button Press", ButtonPress, RawSignal::Button(RawButton::B)),
    InteractionDef::digital(12, "A Button Touch", ButtonTouch, RawSignal::Touch(RawTouch::A)),
    InteractionDef::digital(13, "B Button Touch", ButtonTouch, RawSignal::Touch(RawTouch::B)),
    InteractionDef::digital(
        14,
        "SecondaryThumbRest Touch",
        ThumbTouch,
        RawSignal::Touch(RawTouch::R_THUMB_REST),
    ),
    InteractionDef::digital(
        15,
        "SecondaryThumbRest Near Touch",
        ThumbNearTouch,
        RawSignal::NearTouch(RawNearTouch::R_THUMB_BUTTONS),
    ),
];
