use super::{
    ChannelKind, ControllerProfile, DeviceInputType, Handedness, InputEvent, InputSink,
    Interaction, Pose, RawSignal, SessionId, TrackingState,
    analog::{normalize_1d, normalize_2d},
    edge::detect_edge,
    profiles::{
        Capabilities,
        articulated_hand::{HandGesture, classify_gesture},
    },
    promotion::promote_axes_to_buttons,
};
use crate::{config::ProviderConfig, error::SetupError, hardware::HardwareSession, tracy_span};
use log::{debug, error, trace};
use ovr::{Controller, ControllerState, Node, OvrRuntime};

/// Whether the runtime reports a pose for `controller`.
pub fn is_tracked_controller(controller: Controller) -> bool {
    [
        Controller::LTOUCH,
        Controller::RTOUCH,
        Controller::TOUCH,
        Controller::LTRACKED_REMOTE,
        Controller::RTRACKED_REMOTE,
    ]
    .contains(&controller)
}

fn node_for(handedness: Handedness) -> Node {
    match handedness {
        Handedness::Left => Node::HandLeft,
        Handedness::Right => Node::HandRight,
        Handedness::Both | Handedness::Any => Node::None,
    }
}

/// Everything one physical controller needs between ticks.
pub struct OculusController {
    id: SessionId,
    controller: Controller,
    handedness: Handedness,
    node: Node,
    profile: &'static ControllerProfile,
    interactions: Vec<Interaction>,

    previous_state: ControllerState,
    current_state: ControllerState,

    tracking_state: TrackingState,
    position_available: bool,
    position_approximate: bool,
    rotation_available: bool,
    last_pose: Pose,
    current_pose: Pose,

    gesture: HandGesture,
    enabled: bool,
    primed: bool,

    threshold: f32,
    deadzone: Option<f32>,
}

impl OculusController {
    pub fn new(
        id: SessionId,
        controller: Controller,
        handedness: Handedness,
        profile: &'static ControllerProfile,
        config: &ProviderConfig,
    ) -> Result<Self, SetupError> {
        let defs = profile.interactions(handedness);
        if defs.is_empty() {
            return Err(SetupError::NoInteractions {
                controller,
                profile: profile.name,
            });
        }

        debug!(
            "new {handedness:?} session for {controller:?} using {} ({} interactions)",
            profile.name,
            defs.len()
        );

        Ok(Self {
            id,
            controller,
            handedness,
            node: node_for(handedness),
            profile,
            interactions: defs.iter().copied().map(Interaction::new).collect(),
            previous_state: ControllerState::default(),
            current_state: ControllerState::default(),
            tracking_state: TrackingState::NotTracked,
            position_available: false,
            position_approximate: false,
            rotation_available: false,
            last_pose: Pose::ZERO_IDENTITY,
            current_pose: Pose::ZERO_IDENTITY,
            gesture: HandGesture::Open,
            enabled: true,
            primed: false,
            threshold: config.axis_as_button_threshold,
            deadzone: config.deadzone,
        })
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    pub fn handedness(&self) -> Handedness {
        self.handedness
    }

    pub fn profile(&self) -> &'static ControllerProfile {
        self.profile
    }

    pub fn interactions(&self) -> &[Interaction] {
        &self.interactions
    }

    pub fn interactions_mut(&mut self) -> &mut [Interaction] {
        &mut self.interactions
    }

    pub fn interaction(&self, id: u32) -> Option<&Interaction> {
        self.interactions.iter().find(|i| i.id() == id)
    }

    pub fn tracking_state(&self) -> TrackingState {
        self.tracking_state
    }

    /// True when the last reported position is valid but possibly approximate.
    pub fn is_position_approximate(&self) -> bool {
        self.position_approximate
    }

    /// Source pose as of the last tick, in the input system's space.
    pub fn pose(&self) -> Pose {
        self.current_pose
    }

    pub fn gesture(&self) -> HandGesture {
        self.gesture
    }

    pub fn current_state(&self) -> &ControllerState {
        &self.current_state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// A disabled session is skipped by [`Self::update`] and never polls the runtime.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Polls the controller once and raises an event for every transition since the last
    /// poll.
    ///
    /// The first update after creation only records the hardware state: channels are
    /// seeded and none of them reports a change.
    pub fn update<R: OvrRuntime>(&mut self, hw: &HardwareSession<R>, sink: &mut impl InputSink) {
        tracy_span!("OculusController::update");
        if !self.enabled {
            return;
        }

        let seed = !self.primed;
        self.previous_state = self.current_state;
        self.current_state = hw.controller_state(self.controller);
        promote_axes_to_buttons(&mut self.current_state, self.threshold);
        if seed {
            self.previous_state = self.current_state;
            self.primed = true;
        }

        self.update_tracking(hw, sink);

        if self.interactions.is_empty() {
            error!(
                "{:?} session for {:?} has no interactions, disabling",
                self.handedness, self.controller
            );
            self.enabled = false;
            return;
        }

        for interaction in &mut self.interactions {
            interaction.clear_changed();
        }

        let tick = Tick {
            source: self.id,
            handedness: self.handedness,
            previous: &self.previous_state,
            current: &self.current_state,
            pose: self.current_pose,
            deadzone: self.deadzone,
            seed,
        };

        for interaction in &mut self.interactions {
            if let Err(input_type) = tick.update_interaction(interaction, sink) {
                error!(
                    "{:?} on {:?} controller {:?} is not supported, disabling",
                    input_type, self.handedness, self.controller
                );
                self.enabled = false;
                return;
            }
        }

        if self.profile.capabilities.contains(Capabilities::ARTICULATED_HAND) {
            let gesture = classify_gesture(self.current_state.buttons, self.handedness);
            if gesture != self.gesture {
                trace!("{:?} hand gesture: {gesture:?}", self.handedness);
                self.gesture = gesture;
            }
        }
    }

    fn update_tracking<R: OvrRuntime>(
        &mut self,
        hw: &HardwareSession<R>,
        sink: &mut impl InputSink,
    ) {
        let state = if is_tracked_controller(self.controller) {
            let tracking = hw.node_tracking(self.node);
            self.position_available = tracking.position;
            self.position_approximate = tracking.position_approximate;
            self.rotation_available = tracking.rotation;
            self.last_pose = self.current_pose;
            self.current_pose = hw.node_pose(self.node).into();

            if tracking.position || tracking.rotation {
                TrackingState::Tracked
            } else {
                TrackingState::NotTracked
            }
        } else {
            TrackingState::NotApplicable
        };

        if state != self.tracking_state {
            debug!(
                "{:?} controller {:?}: {:?} -> {state:?}",
                self.handedness, self.controller, self.tracking_state
            );
            self.tracking_state = state;
            sink.raise(InputEvent::TrackingStateChanged {
                source: self.id,
                state,
            });
        }

        if state != TrackingState::Tracked || self.current_pose == self.last_pose {
            return;
        }

        let source = self.id;
        let pose = self.current_pose;
        let event = match (self.position_available, self.rotation_available) {
            (true, true) => InputEvent::SourcePoseChanged { source, pose },
            (true, false) => InputEvent::SourcePositionChanged {
                source,
                position: pose.position,
            },
            (false, true) => InputEvent::SourceRotationChanged {
                source,
                rotation: pose.rotation,
            },
            (false, false) => return,
        };
        sink.raise(event);
    }
}

/// Read-only view of one session's tick shared by all of its channels.
struct Tick<'a> {
    source: SessionId,
    handedness: Handedness,
    previous: &'a ControllerState,
    current: &'a ControllerState,
    pose: Pose,
    deadzone: Option<f32>,
    seed: bool,
}

impl Tick<'_> {
    /// Updates one channel and raises its event. Fails with the input type if the
    /// channel's type isn't handled.
    fn update_interaction(
        &self,
        interaction: &mut Interaction,
        sink: &mut impl InputSink,
    ) -> Result<(), DeviceInputType> {
        let kind = interaction.input_type().channel_kind();
        let source = self.source;
        let handedness = self.handedness;
        let action = interaction.action();
        let id = interaction.id();

        match kind {
            ChannelKind::Ignored => {}
            ChannelKind::Unsupported => return Err(interaction.input_type()),
            ChannelKind::Pose => {
                if interaction.update(self.pose, self.seed) {
                    sink.raise(InputEvent::PoseChanged {
                        source,
                        handedness,
                        action,
                        interaction: id,
                        pose: self.pose,
                    });
                }
            }
            ChannelKind::Press | ChannelKind::Touch | ChannelKind::NearTouch => {
                let (is_set, edge) = match interaction.signal_for(kind) {
                    Some(RawSignal::Button(bit)) => (
                        self.current.buttons.intersects(bit),
                        detect_edge(self.previous.buttons, self.current.buttons, bit),
                    ),
                    Some(RawSignal::Touch(bit)) => (
                        self.current.touches.intersects(bit),
                        detect_edge(self.previous.touches, self.current.touches, bit),
                    ),
                    Some(RawSignal::NearTouch(bit)) => (
                        self.current.near_touches.intersects(bit),
                        detect_edge(self.previous.near_touches, self.current.near_touches, bit),
                    ),
                    _ => return Ok(()),
                };

                if self.seed {
                    interaction.update(is_set, true);
                    return Ok(());
                }

                let Some(pressed) = edge.value() else {
                    return Ok(());
                };
                if interaction.update(pressed, false) {
                    let event = if pressed {
                        InputEvent::InputDown {
                            source,
                            handedness,
                            action,
                            interaction: id,
                        }
                    } else {
                        InputEvent::InputUp {
                            source,
                            handedness,
                            action,
                            interaction: id,
                        }
                    };
                    sink.raise(event);
                }
            }
            ChannelKind::SingleAxis => {
                let Some(RawSignal::Axis1D(axis)) = interaction.signal_for(kind) else {
                    return Ok(());
                };
                let value = normalize_1d(self.current.axis_1d(axis), self.deadzone);
                if interaction.update(value, self.seed) {
                    sink.raise(InputEvent::FloatChanged {
                        source,
                        handedness,
                        action,
                        interaction: id,
                        value,
                    });
                }
            }
            ChannelKind::DualAxis => {
                let Some(RawSignal::Axis2D(axis)) = interaction.signal_for(kind) else {
                    return Ok(());
                };
                let value = normalize_2d(self.current.axis_2d(axis), self.deadzone);
                if interaction.update(value, self.seed) {
                    sink.raise(InputEvent::PositionChanged {
                        source,
                        handedness,
                        action,
                        interaction: id,
                        value,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InteractionDef, SupportedControllerType, profiles::oculus_touch::TOUCH};
    use fakeovr::FakeRuntime;
    use ovr::RawButton;

    static STRAY: ControllerProfile = ControllerProfile {
        name: "stray",
        controller_type: SupportedControllerType::OculusTouch,
        left: &[],
        right: &[
            InteractionDef::digital(
                0,
                "A Button Press",
                DeviceInputType::ButtonPress,
                RawSignal::Button(RawButton::A),
            ),
            InteractionDef::digital(
                1,
                "Dpad Up",
                DeviceInputType::DirectionalPad,
                RawSignal::Button(RawButton::DPAD_UP),
            ),
            InteractionDef::digital(
                2,
                "B Button Press",
                DeviceInputType::ButtonPress,
                RawSignal::Button(RawButton::B),
            ),
        ],
        capabilities: Capabilities::empty(),
    };

    static QUIET: ControllerProfile = ControllerProfile {
        name: "quiet",
        controller_type: SupportedControllerType::OculusTouch,
        left: &[
            InteractionDef {
                id: 0,
                description: "Nothing",
                axis_type: crate::input::AxisType::None,
                input_type: DeviceInputType::None,
                signal: None,
            },
            InteractionDef::digital(
                1,
                "X Button Press",
                DeviceInputType::ButtonPress,
                RawSignal::Button(RawButton::X),
            ),
        ],
        right: &[],
        capabilities: Capabilities::empty(),
    };

    fn hardware(controller: Controller) -> HardwareSession<FakeRuntime> {
        crate::init_logging();
        let runtime = FakeRuntime::new();
        runtime.connect(controller);
        HardwareSession::new(runtime)
    }

    #[test]
    fn tracked_types() {
        assert!(is_tracked_controller(Controller::LTOUCH));
        assert!(is_tracked_controller(Controller::TOUCH));
        assert!(is_tracked_controller(Controller::RTRACKED_REMOTE));
        assert!(!is_tracked_controller(Controller::REMOTE));
        assert!(!is_tracked_controller(Controller::GAMEPAD));
        assert!(!is_tracked_controller(Controller::TOUCHPAD));
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = OculusController::new(
            SessionId::default(),
            Controller::RTOUCH,
            Handedness::Right,
            &QUIET,
            &ProviderConfig::default(),
        )
        .err()
        .unwrap();
        assert!(
            matches!(err, SetupError::NoInteractions { profile: "quiet", .. }),
            "{err}"
        );
    }

    #[test]
    fn unsupported_type_disables_session() {
        let hw = hardware(Controller::RTOUCH);
        hw.runtime().set_buttons(RawButton::A | RawButton::B);

        let mut controller = OculusController::new(
            SessionId::default(),
            Controller::RTOUCH,
            Handedness::Right,
            &STRAY,
            &ProviderConfig::default(),
        )
        .unwrap();

        let mut events: Vec<InputEvent> = Vec::new();
        controller.update(&hw, &mut events);
        assert!(!controller.is_enabled());

        // Channels after the unsupported one are not touched.
        assert!(bool::try_from(controller.interaction(0).unwrap().value()).unwrap());
        assert!(!bool::try_from(controller.interaction(2).unwrap().value()).unwrap());

        let queries = hw.runtime().state_queries();
        controller.update(&hw, &mut events);
        assert_eq!(hw.runtime().state_queries(), queries);
        assert!(events.is_empty(), "{events:?}");
    }

    #[test]
    fn none_type_is_ignored() {
        let hw = hardware(Controller::LTOUCH);
        let mut controller = OculusController::new(
            SessionId::default(),
            Controller::LTOUCH,
            Handedness::Left,
            &QUIET,
            &ProviderConfig::default(),
        )
        .unwrap();

        let mut events: Vec<InputEvent> = Vec::new();
        controller.update(&hw, &mut events);
        hw.runtime().set_buttons(RawButton::X);
        controller.update(&hw, &mut events);

        assert!(controller.is_enabled());
        assert_eq!(
            events,
            vec![InputEvent::InputDown {
                source: SessionId::default(),
                handedness: Handedness::Left,
                action: Default::default(),
                interaction: 1,
            }]
        );
    }

    #[test]
    fn untracked_type_is_not_applicable() {
        let hw = hardware(Controller::REMOTE);
        let mut controller = OculusController::new(
            SessionId::default(),
            Controller::REMOTE,
            Handedness::Both,
            &TOUCH,
            &ProviderConfig::default(),
        )
        .unwrap();

        let mut events: Vec<InputEvent> = Vec::new();
        controller.update(&hw, &mut events);
        assert_eq!(controller.tracking_state(), TrackingState::NotApplicable);
        assert_eq!(
            events,
            vec![InputEvent::TrackingStateChanged {
                source: SessionId::default(),
                state: TrackingState::NotApplicable,
            }]
        );
    }
}
