use super::{AxisType, ChannelKind, DeviceInputType, InputActionId, Pose};
use derive_more::{From, TryInto};
use glam::Vec2;
use ovr::{RawAxis1D, RawAxis2D, RawButton, RawNearTouch, RawTouch};

/// The raw hardware signal a channel reads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RawSignal {
    Button(RawButton),
    Touch(RawTouch),
    NearTouch(RawNearTouch),
    Axis1D(RawAxis1D),
    Axis2D(RawAxis2D),
}

/// One row of a controller's static channel table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InteractionDef {
    pub id: u32,
    pub description: &'static str,
    pub axis_type: AxisType,
    pub input_type: DeviceInputType,
    /// `None` for pose channels, which read the source pose instead.
    pub signal: Option<RawSignal>,
}

impl InteractionDef {
    pub const fn pose(id: u32, description: &'static str, input_type: DeviceInputType) -> Self {
        Self {
            id,
            description,
            axis_type: AxisType::SixDof,
            input_type,
            signal: None,
        }
    }

    pub const fn digital(
        id: u32,
        description: &'static str,
        input_type: DeviceInputType,
        signal: RawSignal,
    ) -> Self {
        Self {
            id,
            description,
            axis_type: AxisType::Digital,
            input_type,
            signal: Some(signal),
        }
    }

    pub const fn single_axis(
        id: u32,
        description: &'static str,
        input_type: DeviceInputType,
        axis: RawAxis1D,
    ) -> Self {
        Self {
            id,
            description,
            axis_type: AxisType::SingleAxis,
            input_type,
            signal: Some(RawSignal::Axis1D(axis)),
        }
    }

    pub const fn dual_axis(
        id: u32,
        description: &'static str,
        input_type: DeviceInputType,
        axis: RawAxis2D,
    ) -> Self {
        Self {
            id,
            description,
            axis_type: AxisType::DualAxis,
            input_type,
            signal: Some(RawSignal::Axis2D(axis)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, From, TryInto)]
pub enum InteractionValue {
    Bool(bool),
    Float(f32),
    Vec2(Vec2),
    Pose(Pose),
}

impl InteractionValue {
    fn default_for(axis_type: AxisType) -> Self {
        match axis_type {
            AxisType::SingleAxis => Self::Float(0.0),
            AxisType::DualAxis => Self::Vec2(Vec2::ZERO),
            AxisType::SixDof => Self::Pose(Pose::ZERO_IDENTITY),
            AxisType::None | AxisType::Digital => Self::Bool(false),
        }
    }
}

/// A channel: one logical input of a controller and its value as of the last tick.
#[derive(Debug, Clone)]
pub struct Interaction {
    def: InteractionDef,
    action: InputActionId,
    value: InteractionValue,
    changed: bool,
}

impl Interaction {
    pub fn new(def: InteractionDef) -> Self {
        Self {
            value: InteractionValue::default_for(def.axis_type),
            def,
            action: InputActionId::NONE,
            changed: false,
        }
    }

    pub fn id(&self) -> u32 {
        self.def.id
    }

    pub fn description(&self) -> &'static str {
        self.def.description
    }

    pub fn axis_type(&self) -> AxisType {
        self.def.axis_type
    }

    pub fn input_type(&self) -> DeviceInputType {
        self.def.input_type
    }

    pub fn action(&self) -> InputActionId {
        self.action
    }

    pub fn set_action(&mut self, action: InputActionId) {
        self.action = action;
    }

    pub fn value(&self) -> InteractionValue {
        self.value
    }

    /// True if the last tick changed this channel's value.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// The signal to read for `kind`, if the table row is consistent with it.
    ///
    /// Rows whose axis type or signal class doesn't match the input type never produce
    /// values.
    pub fn signal_for(&self, kind: ChannelKind) -> Option<RawSignal> {
        let signal = self.def.signal?;
        let consistent = matches!(
            (kind, self.def.axis_type, signal),
            (ChannelKind::Press, AxisType::Digital, RawSignal::Button(_))
                | (ChannelKind::Touch, AxisType::Digital, RawSignal::Touch(_))
                | (ChannelKind::NearTouch, AxisType::Digital, RawSignal::NearTouch(_))
                | (ChannelKind::SingleAxis, AxisType::SingleAxis, RawSignal::Axis1D(_))
                | (ChannelKind::DualAxis, AxisType::DualAxis, RawSignal::Axis2D(_))
        );
        consistent.then_some(signal)
    }

    /// Stores `value` and recomputes the changed flag against the previous value.
    ///
    /// A `seed` update records the value without reporting a change.
    pub(super) fn update(&mut self, value: impl Into<InteractionValue>, seed: bool) -> bool {
        let value = value.into();
        self.changed = !seed && self.value != value;
        self.value = value;
        self.changed
    }

    pub(super) fn clear_changed(&mut self) {
        self.changed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER_PRESS: InteractionDef = InteractionDef::digital(
        4,
        "Trigger Press",
        DeviceInputType::TriggerPress,
        RawSignal::Button(RawButton::R_INDEX_TRIGGER),
    );

    #[test]
    fn defaults_follow_axis_type() {
        let press = Interaction::new(TRIGGER_PRESS);
        assert_eq!(press.value(), InteractionValue::Bool(false));
        assert!(!press.changed());

        let stick = Interaction::new(InteractionDef::dual_axis(
            6,
            "Thumbstick",
            DeviceInputType::ThumbStick,
            RawAxis2D::RThumbstick,
        ));
        assert_eq!(stick.value(), InteractionValue::Vec2(Vec2::ZERO));

        let pointer = Interaction::new(InteractionDef::pose(
            0,
            "Spatial Pointer",
            DeviceInputType::SpatialPointer,
        ));
        assert_eq!(pointer.value(), InteractionValue::Pose(Pose::ZERO_IDENTITY));
    }

    #[test]
    fn changed_only_on_difference() {
        let mut trigger = Interaction::new(InteractionDef::single_axis(
            1,
            "Trigger",
            DeviceInputType::Trigger,
            RawAxis1D::RIndexTrigger,
        ));

        assert!(trigger.update(0.3_f32, false));
        assert!(!trigger.update(0.3_f32, false));
        assert!(trigger.update(0.0_f32, false));
        assert_eq!(f32::try_from(trigger.value()).unwrap(), 0.0);
    }

    #[test]
    fn seeding_reports_no_change() {
        let mut press = Interaction::new(TRIGGER_PRESS);
        assert!(!press.update(true, true));
        assert!(!press.changed());
        assert!(bool::try_from(press.value()).unwrap());
    }

    #[test]
    fn inconsistent_rows_have_no_signal() {
        let press = Interaction::new(TRIGGER_PRESS);
        assert_eq!(
            press.signal_for(ChannelKind::Press),
            Some(RawSignal::Button(RawButton::R_INDEX_TRIGGER))
        );
        assert_eq!(press.signal_for(ChannelKind::Touch), None);

        let mismatched = Interaction::new(InteractionDef {
            axis_type: AxisType::SingleAxis,
            ..TRIGGER_PRESS
        });
        assert_eq!(mismatched.signal_for(ChannelKind::Press), None);
    }
}
