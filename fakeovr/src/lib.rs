//! In-memory stand-in for the Oculus runtime.
//!
//! Tests mutate the fake between ticks and the input layer reads it back through
//! [`OvrRuntime`] exactly as it would the native plugin.

use glam::Vec2;
use ovr::{
    Controller, ControllerState, Node, OvrRuntime, Posef, RawAxis1D, RawAxis2D, RawButton,
    RawNearTouch, RawTouch, Step,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

#[derive(Default, Copy, Clone)]
struct NodeData {
    position_tracked: bool,
    position_valid: bool,
    orientation_tracked: bool,
    pose: Posef,
}

#[derive(Default)]
struct Inner {
    connected: Controller,
    active: Controller,
    state: ControllerState,
    nodes: HashMap<Node, NodeData>,
}

#[derive(Default)]
pub struct FakeRuntime {
    inner: RefCell<Inner>,
    state_queries: Cell<usize>,
    last_step: Cell<Option<Step>>,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&self, controller: Controller) {
        let mut inner = self.inner.borrow_mut();
        inner.connected |= controller;
        inner.active = controller;
    }

    pub fn disconnect(&self, controller: Controller) {
        let mut inner = self.inner.borrow_mut();
        inner.connected.remove(controller);
        inner.active.remove(controller);
    }

    pub fn set_connected(&self, connected: Controller) {
        self.inner.borrow_mut().connected = connected;
    }

    pub fn set_buttons(&self, buttons: RawButton) {
        self.inner.borrow_mut().state.buttons = buttons;
    }

    pub fn set_touches(&self, touches: RawTouch) {
        self.inner.borrow_mut().state.touches = touches;
    }

    pub fn set_near_touches(&self, near_touches: RawNearTouch) {
        self.inner.borrow_mut().state.near_touches = near_touches;
    }

    pub fn set_axis_1d(&self, axis: RawAxis1D, value: f32) {
        let state = &mut self.inner.borrow_mut().state;
        match axis {
            RawAxis1D::LIndexTrigger => state.l_index_trigger = value,
            RawAxis1D::RIndexTrigger => state.r_index_trigger = value,
            RawAxis1D::LHandTrigger => state.l_hand_trigger = value,
            RawAxis1D::RHandTrigger => state.r_hand_trigger = value,
        }
    }

    pub fn set_axis_2d(&self, axis: RawAxis2D, value: Vec2) {
        let state = &mut self.inner.borrow_mut().state;
        match axis {
            RawAxis2D::LThumbstick => state.l_thumbstick = value,
            RawAxis2D::RThumbstick => state.r_thumbstick = value,
            RawAxis2D::LTouchpad => state.l_touchpad = value,
            RawAxis2D::RTouchpad => state.r_touchpad = value,
        }
    }

    /// Sets which parts of `node`'s pose the runtime reports as tracked.
    pub fn set_node_tracking(&self, node: Node, position: bool, orientation: bool) {
        let mut inner = self.inner.borrow_mut();
        let data = inner.nodes.entry(node).or_default();
        data.position_tracked = position;
        data.position_valid = position;
        data.orientation_tracked = orientation;
    }

    pub fn set_node_pose(&self, node: Node, pose: Posef) {
        self.inner.borrow_mut().nodes.entry(node).or_default().pose = pose;
    }

    /// Number of controller state polls served so far.
    pub fn state_queries(&self) -> usize {
        self.state_queries.get()
    }

    /// The step passed with the most recent pose query.
    pub fn last_step(&self) -> Option<Step> {
        self.last_step.get()
    }

    fn node(&self, node: Node) -> NodeData {
        self.inner
            .borrow()
            .nodes
            .get(&node)
            .copied()
            .unwrap_or_default()
    }
}

impl OvrRuntime for FakeRuntime {
    fn controller_state(&self, controller: Controller) -> ControllerState {
        self.state_queries.set(self.state_queries.get() + 1);
        let inner = self.inner.borrow();
        if !inner.connected.contains(controller) {
            return ControllerState::default();
        }

        ControllerState {
            connected_controllers: inner.connected,
            ..inner.state
        }
    }

    fn connected_controllers(&self) -> Controller {
        self.inner.borrow().connected
    }

    fn active_controller(&self) -> Controller {
        self.inner.borrow().active
    }

    fn node_position_tracked(&self, node: Node) -> bool {
        self.node(node).position_tracked
    }

    fn node_position_valid(&self, node: Node) -> bool {
        self.node(node).position_valid
    }

    fn node_orientation_tracked(&self, node: Node) -> bool {
        self.node(node).orientation_tracked
    }

    fn node_pose(&self, node: Node, step: Step) -> Posef {
        self.last_step.set(Some(step));
        self.node(node).pose
    }
}
