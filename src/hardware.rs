use log::{debug, trace};
use ovr::{Controller, ControllerState, Node, OvrRuntime, Posef, Step};

/// The host's handle on the native runtime plus the state cached from it each refresh.
///
/// Passed by reference into everything that polls hardware, so there is no process-wide
/// binding state.
pub struct HardwareSession<R: OvrRuntime> {
    runtime: R,
    connected: Controller,
    active: Controller,
    step: Step,
}

/// Tracking flags for one node, as reported this tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct NodeTracking {
    pub position: bool,
    pub position_approximate: bool,
    pub rotation: bool,
}

impl<R: OvrRuntime> HardwareSession<R> {
    pub fn new(runtime: R) -> Self {
        debug!("opening hardware session");
        Self {
            runtime,
            connected: Controller::empty(),
            active: Controller::empty(),
            step: Step::Render,
        }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Connected controllers as of the last [`Self::refresh_controllers`].
    pub fn connected(&self) -> Controller {
        self.connected
    }

    pub fn active(&self) -> Controller {
        self.active
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    /// Re-reads the connected and active controller masks from the runtime.
    pub fn refresh_controllers(&mut self) -> Controller {
        self.connected = self.runtime.connected_controllers();
        self.active = self.runtime.active_controller();
        trace!(
            "connected controllers: {:?}, active: {:?}",
            self.connected, self.active
        );
        self.connected
    }

    pub fn controller_state(&self, controller: Controller) -> ControllerState {
        self.runtime.controller_state(controller)
    }

    pub fn node_tracking(&self, node: Node) -> NodeTracking {
        let position = self.runtime.node_position_tracked(node);
        NodeTracking {
            position,
            position_approximate: position && self.runtime.node_position_valid(node),
            rotation: self.runtime.node_orientation_tracked(node),
        }
    }

    pub fn node_pose(&self, node: Node) -> Posef {
        self.runtime.node_pose(node, self.step)
    }

    pub fn into_runtime(self) -> R {
        debug!("closing hardware session");
        self.runtime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakeovr::FakeRuntime;

    #[test]
    fn refresh_caches_masks() {
        let mut hw = HardwareSession::new(FakeRuntime::new());
        hw.runtime().connect(Controller::LTOUCH);
        hw.runtime().connect(Controller::RTOUCH);
        assert!(hw.connected().is_empty());

        assert_eq!(hw.refresh_controllers(), Controller::TOUCH);
        assert_eq!(hw.connected(), Controller::TOUCH);
        assert_eq!(hw.active(), Controller::RTOUCH);

        // Cached until the next refresh.
        hw.runtime().disconnect(Controller::RTOUCH);
        assert_eq!(hw.active(), Controller::RTOUCH);
        hw.refresh_controllers();
        assert_eq!(hw.connected(), Controller::LTOUCH);
        assert!(hw.active().is_empty());
    }

    #[test]
    fn node_queries_use_current_step() {
        let mut hw = HardwareSession::new(FakeRuntime::new());
        hw.runtime().set_node_tracking(Node::HandLeft, true, false);

        let tracking = hw.node_tracking(Node::HandLeft);
        assert!(tracking.position && tracking.position_approximate && !tracking.rotation);
        assert_eq!(hw.node_tracking(Node::HandRight), NodeTracking::default());

        hw.node_pose(Node::HandLeft);
        assert_eq!(hw.runtime().last_step(), Some(Step::Render));

        hw.set_step(Step::Physics);
        assert_eq!(hw.step(), Step::Physics);
        hw.node_pose(Node::HandLeft);

        let runtime = hw.into_runtime();
        assert_eq!(runtime.last_step(), Some(Step::Physics));
    }
}
