pub mod articulated_hand;
pub mod oculus_touch;

use super::{Handedness, SupportedControllerType, interaction::InteractionDef};
use crate::config::TouchProfile;
use articulated_hand::ARTICULATED_HAND;
use bitflags::bitflags;
use oculus_touch::TOUCH;

bitflags! {
    /// Optional behavior layered on top of the channel tables.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub struct Capabilities: u8 {
        /// Classify a hand gesture from the buttons every tick.
        const ARTICULATED_HAND = 1 << 0;
    }
}

/// Static description of one kind of controller: its channel tables and capabilities.
#[derive(Debug)]
pub struct ControllerProfile {
    pub name: &'static str,
    pub controller_type: SupportedControllerType,
    pub left: &'static [InteractionDef],
    pub right: &'static [InteractionDef],
    pub capabilities: Capabilities,
}

impl ControllerProfile {
    /// Channel table for a controller held in `hand`. Unhanded controllers use the left table.
    pub fn interactions(&self, hand: Handedness) -> &'static [InteractionDef] {
        match hand {
            Handedness::Right => self.right,
            Handedness::Left | Handedness::Both | Handedness::Any => self.left,
        }
    }
}

pub struct Profiles {
    list: &'static [(TouchProfile, &'static ControllerProfile)],
}

impl Profiles {
    #[inline]
    pub fn get() -> &'static Self {
        // Add supported controller profiles here.
        static P: Profiles = Profiles {
            list: &[
                (TouchProfile::Controller, &TOUCH),
                (TouchProfile::ArticulatedHand, &ARTICULATED_HAND),
            ],
        };
        &P
    }

    pub fn profiles_iter(&self) -> impl Iterator<Item = &'static ControllerProfile> {
        self.list.iter().map(|(_, p)| *p)
    }

    pub fn profile_for(
        &self,
        controller_type: SupportedControllerType,
        touch_profile: TouchProfile,
    ) -> Option<&'static ControllerProfile> {
        self.list.iter().find_map(|(touch, p)| {
            (p.controller_type == controller_type && *touch == touch_profile).then_some(*p)
        })
    }

    pub fn profile_from_name(&self, name: &str) -> Option<&'static ControllerProfile> {
        self.profiles_iter().find(|p| p.name == name)
    }
}
