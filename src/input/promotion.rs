use ovr::{ControllerState, RawButton};

/// ORs synthetic button bits into `state.buttons` for every analog reading past `threshold`.
///
/// Triggers count as pressed at `threshold`, and each thumbstick direction at `threshold`
/// along its axis. Both hands are always promoted. Applying this twice is the same as once.
pub fn promote_axes_to_buttons(state: &mut ControllerState, threshold: f32) {
    let promotions = [
        (state.l_index_trigger >= threshold, RawButton::L_INDEX_TRIGGER),
        (state.l_hand_trigger >= threshold, RawButton::L_HAND_TRIGGER),
        (state.l_thumbstick.y >= threshold, RawButton::L_THUMBSTICK_UP),
        (state.l_thumbstick.y <= -threshold, RawButton::L_THUMBSTICK_DOWN),
        (state.l_thumbstick.x <= -threshold, RawButton::L_THUMBSTICK_LEFT),
        (state.l_thumbstick.x >= threshold, RawButton::L_THUMBSTICK_RIGHT),
        (state.r_index_trigger >= threshold, RawButton::R_INDEX_TRIGGER),
        (state.r_hand_trigger >= threshold, RawButton::R_HAND_TRIGGER),
        (state.r_thumbstick.y >= threshold, RawButton::R_THUMBSTICK_UP),
        (state.r_thumbstick.y <= -threshold, RawButton::R_THUMBSTICK_DOWN),
        (state.r_thumbstick.x <= -threshold, RawButton::R_THUMBSTICK_LEFT),
        (state.r_thumbstick.x >= threshold, RawButton::R_THUMBSTICK_RIGHT),
    ];

    for (crossed, bit) in promotions {
        if crossed {
            state.buttons |= bit;
        }
    }
}
