use super::{
    Handedness, InputEvent, InputSink, OculusController, SupportedControllerType,
    profiles::Profiles,
};
use crate::{
    config::ProviderConfig,
    error::{ConfigError, SetupError},
    hardware::HardwareSession,
    tracy_span,
};
use log::{debug, error, info, warn};
use ovr::{CONTROLLERS, Controller, OvrRuntime, Step, should_resolve_controller};
use slotmap::SlotMap;
use std::collections::HashMap;
use std::time::Duration;

slotmap::new_key_type! {
    /// Identifies one controller session for as long as it stays connected.
    pub struct SessionId;
}

pub fn handedness_for(controller: Controller) -> Handedness {
    if controller == Controller::LTOUCH || controller == Controller::LTRACKED_REMOTE {
        Handedness::Left
    } else if controller == Controller::RTOUCH || controller == Controller::RTRACKED_REMOTE {
        Handedness::Right
    } else if controller == Controller::REMOTE
        || controller == Controller::GAMEPAD
        || controller == Controller::TOUCHPAD
    {
        Handedness::Both
    } else {
        Handedness::Any
    }
}

pub fn controller_type_for(controller: Controller) -> SupportedControllerType {
    if controller == Controller::LTOUCH
        || controller == Controller::RTOUCH
        || controller == Controller::TOUCH
    {
        SupportedControllerType::OculusTouch
    } else if controller == Controller::REMOTE {
        SupportedControllerType::OculusRemote
    } else {
        warn!("{controller:?} is not a known controller type, assuming a generic controller");
        SupportedControllerType::GenericOpenVr
    }
}

/// Tracks which controllers are connected and owns a session for each of them.
pub struct DeviceManager {
    config: ProviderConfig,
    sessions: SlotMap<SessionId, OculusController>,
    active: HashMap<Controller, SessionId>,
    /// Slots whose setup failed. Not retried until they disconnect.
    failed: Controller,
    refresh_interval: Duration,
    since_refresh: Duration,
}

impl Default for DeviceManager {
    fn default() -> Self {
        Self::with_valid_config(ProviderConfig::default())
    }
}

impl DeviceManager {
    pub fn new(config: ProviderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: ProviderConfig) -> Self {
        let refresh_interval = config.refresh_interval();
        Self {
            config,
            sessions: SlotMap::with_key(),
            active: HashMap::new(),
            failed: Controller::empty(),
            refresh_interval,
            since_refresh: refresh_interval,
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Runs one frame: refreshes the connected controllers if the refresh interval has
    /// elapsed (always on the first call), then updates every session.
    pub fn update<R: OvrRuntime>(
        &mut self,
        hw: &mut HardwareSession<R>,
        dt: Duration,
        sink: &mut impl InputSink,
    ) {
        tracy_span!("DeviceManager::update");
        hw.set_step(Step::Render);

        self.since_refresh += dt;
        if self.since_refresh >= self.refresh_interval {
            self.since_refresh = Duration::ZERO;
            self.refresh_devices(hw, sink);
        }

        for session in self.sessions.values_mut() {
            session.update(hw, sink);
        }
    }

    /// Reconciles sessions against the runtime's connected controllers.
    pub fn refresh_devices<R: OvrRuntime>(
        &mut self,
        hw: &mut HardwareSession<R>,
        sink: &mut impl InputSink,
    ) {
        tracy_span!("DeviceManager::refresh_devices");
        let connected = hw.refresh_controllers();

        let mut lost: Vec<_> = self
            .active
            .iter()
            .filter(|(controller, _)| !connected.contains(**controller))
            .map(|(controller, id)| (*controller, *id))
            .collect();
        lost.sort_by_key(|(controller, _)| controller.bits());

        for (controller, id) in lost {
            self.active.remove(&controller);
            if let Some(session) = self.sessions.remove(id) {
                info!("{controller:?} disconnected");
                sink.raise(InputEvent::SourceLost {
                    source: id,
                    handedness: session.handedness(),
                });
            }
        }
        self.failed &= connected;

        for controller_type in CONTROLLERS {
            if !should_resolve_controller(controller_type, connected) {
                continue;
            }

            // Each half of a Touch pair gets its own session.
            let slots = if controller_type == Controller::TOUCH {
                [Controller::LTOUCH, Controller::RTOUCH]
            } else {
                [controller_type, Controller::empty()]
            };

            for slot in slots.into_iter().filter(|slot| !slot.is_empty()) {
                if self.active.contains_key(&slot) || self.failed.contains(slot) {
                    continue;
                }

                match self.setup(slot) {
                    Ok(id) => {
                        let session = &self.sessions[id];
                        info!(
                            "{slot:?} connected as {} ({:?})",
                            session.profile().name,
                            session.handedness()
                        );
                        sink.raise(InputEvent::SourceDetected {
                            source: id,
                            handedness: session.handedness(),
                        });
                    }
                    Err(e) => {
                        error!("Failed to set up {slot:?}: {e}");
                        self.failed |= slot;
                    }
                }
            }
        }
    }

    fn setup(&mut self, controller: Controller) -> Result<SessionId, SetupError> {
        let handedness = handedness_for(controller);
        let controller_type = controller_type_for(controller);
        let profile = Profiles::get()
            .profile_for(controller_type, self.config.touch_profile)
            .ok_or(SetupError::NoProfile {
                controller,
                controller_type,
            })?;

        let config = &self.config;
        let id = self.sessions.try_insert_with_key(|id| {
            OculusController::new(id, controller, handedness, profile, config)
        })?;
        self.active.insert(controller, id);
        Ok(id)
    }

    /// Drops every session, raising `SourceLost` for each.
    pub fn disable(&mut self, sink: &mut impl InputSink) {
        debug!("disabling {} sessions", self.sessions.len());
        let mut sessions: Vec<_> = self.sessions.drain().collect();
        sessions.sort_by_key(|(_, session)| session.controller().bits());
        for (id, session) in sessions {
            sink.raise(InputEvent::SourceLost {
                source: id,
                handedness: session.handedness(),
            });
        }

        self.active.clear();
        self.failed = Controller::empty();
        self.since_refresh = self.refresh_interval;
    }

    /// Connected slots whose setup failed. They are retried once they disconnect.
    pub fn failed_controllers(&self) -> Controller {
        self.failed
    }

    pub fn active_controllers(&self) -> impl Iterator<Item = &OculusController> {
        self.sessions.values()
    }

    pub fn session(&self, id: SessionId) -> Option<&OculusController> {
        self.sessions.get(id)
    }

    pub fn session_mut(&mut self, id: SessionId) -> Option<&mut OculusController> {
        self.sessions.get_mut(id)
    }

    pub fn session_for(&self, controller: Controller) -> Option<&OculusController> {
        self.active
            .get(&controller)
            .and_then(|id| self.sessions.get(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_rejected() {
        for secs in [-1.0, 1e30] {
            let config = ProviderConfig {
                refresh_interval_secs: secs,
                ..Default::default()
            };
            assert!(
                matches!(
                    DeviceManager::new(config),
                    Err(ConfigError::Invalid {
                        field: "refresh_interval_secs",
                        ..
                    })
                ),
                "{secs}"
            );
        }

        assert!(DeviceManager::new(ProviderConfig::default()).is_ok());
    }

    #[test]
    fn handedness() {
        assert_eq!(handedness_for(Controller::LTOUCH), Handedness::Left);
        assert_eq!(handedness_for(Controller::RTRACKED_REMOTE), Handedness::Right);
        assert_eq!(handedness_for(Controller::GAMEPAD), Handedness::Both);
        assert_eq!(handedness_for(Controller::TOUCH), Handedness::Any);
    }

    #[test]
    fn controller_types() {
        assert_eq!(
            controller_type_for(Controller::RTOUCH),
            SupportedControllerType::OculusTouch
        );
        assert_eq!(
            controller_type_for(Controller::REMOTE),
            SupportedControllerType::OculusRemote
        );
        assert_eq!(
            controller_type_for(Controller::LTRACKED_REMOTE),
            SupportedControllerType::GenericOpenVr
        );
    }
}
