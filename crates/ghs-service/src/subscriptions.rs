use ghs_core::Channel;

/// Per-channel notification subscription flags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Subscriptions {
    schedule_changed: bool,
    live_observation: bool,
}

impl Subscriptions {
    fn flag_mut(&mut self, channel: Channel) -> &mut bool {
        match channel {
            Channel::ScheduleChanged => &mut self.schedule_changed,
            Channel::LiveObservation => &mut self.live_observation,
        }
    }

    /// Marks `channel` subscribed. Returns true when newly added.
    pub fn subscribe(&mut self, channel: Channel) -> bool {
        let flag = self.flag_mut(channel);
        let added = !*flag;
        *flag = true;
        added
    }

    /// Marks `channel` unsubscribed. Returns true when previously subscribed.
    pub fn unsubscribe(&mut self, channel: Channel) -> bool {
        let flag = self.flag_mut(channel);
        let removed = *flag;
        *flag = false;
        removed
    }

    pub fn is_subscribed(&self, channel: Channel) -> bool {
        match channel {
            Channel::ScheduleChanged => self.schedule_changed,
            Channel::LiveObservation => self.live_observation,
        }
    }
}
