//! Service facade dispatching host callbacks and observation ticks.

use ghs_codec::error::{EncodeError, SegmentationError};
use ghs_codec::feature::encode_features;
use ghs_codec::observation::Observation;
use ghs_codec::segment::segment_record;
use ghs_core::protocol::PACKET_HEADER_RESERVE;
use ghs_core::{Channel, Characteristic, Descriptor};
use ghs_transport::GattHost;
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::schedule::{ScheduleState, ValidationError};
use crate::scheduler::NotifyTimer;
use crate::subscriptions::Subscriptions;

/// One generic health service instance bound to one host.
///
/// Owns every piece of mutable state; host callbacks and `poll` all take
/// `&mut self` and are serialized by that ownership.
pub struct HealthService<H: GattHost> {
    pub host: H,
    pub config: ServiceConfig,
    schedule: ScheduleState,
    subscriptions: Subscriptions,
    timer: NotifyTimer,
    feature_value: Vec<u8>,
}

impl<H: GattHost> HealthService<H> {
    pub fn new(host: H, config: ServiceConfig) -> Self {
        let schedule = ScheduleState::new(&config);
        let feature_value = encode_features(config.supported_measurement);
        Self {
            host,
            config,
            schedule,
            subscriptions: Subscriptions::default(),
            timer: NotifyTimer::default(),
            feature_value,
        }
    }

    pub fn schedule(&self) -> &ScheduleState {
        &self.schedule
    }

    /// Deadline of the pending observation tick, if one is armed.
    pub fn next_tick_millis(&self) -> Option<u64> {
        self.timer.deadline_millis()
    }

    /// Serves characteristic reads; `None` maps to the host's
    /// request-not-supported status.
    pub fn on_characteristic_read(&self, characteristic: Characteristic) -> Option<Vec<u8>> {
        match characteristic {
            Characteristic::Features => Some(self.feature_value.clone()),
            Characteristic::ScheduleChanged | Characteristic::LiveObservation => None,
        }
    }

    /// Serves descriptor reads with the last stored schedule bytes.
    pub fn on_descriptor_read(&self, descriptor: Descriptor) -> Option<Vec<u8>> {
        match descriptor {
            Descriptor::Schedule => Some(self.schedule.raw().to_vec()),
        }
    }

    /// Validates and applies a schedule write from `writer`.
    ///
    /// On acceptance the new raw value fans out on the schedule-changed
    /// channel to every connected listener except the writer, which
    /// already holds it.
    pub fn on_descriptor_write(
        &mut self,
        writer: &H::ListenerId,
        descriptor: Descriptor,
        value: &[u8],
    ) -> Result<(), ValidationError> {
        match descriptor {
            Descriptor::Schedule => {
                self.schedule.apply_write(value, &self.config)?;
                debug!(
                    "schedule reconfigured, update interval {}s",
                    self.schedule.interval_secs()
                );
                self.broadcast_schedule_change(writer);
                Ok(())
            }
        }
    }

    fn broadcast_schedule_change(&mut self, writer: &H::ListenerId) {
        if !self.subscriptions.is_subscribed(Channel::ScheduleChanged) {
            return;
        }
        let value = self.schedule.raw().to_vec();
        for listener in self.host.listeners() {
            if &listener != writer {
                self.host
                    .notify_listener(&listener, Channel::ScheduleChanged, &value);
            }
        }
    }

    /// Handles a channel becoming subscribed. A fresh live-observation
    /// subscription notifies immediately and arms the cycle.
    pub fn on_subscribe(&mut self, channel: Channel, now_millis: u64) -> Result<(), EncodeError> {
        if self.subscriptions.subscribe(channel) && channel == Channel::LiveObservation {
            self.notify_observation(now_millis)?;
        }
        Ok(())
    }

    /// Handles a channel becoming unsubscribed; dropping live observations
    /// cancels the pending tick before it can fire.
    pub fn on_unsubscribe(&mut self, channel: Channel) {
        self.subscriptions.unsubscribe(channel);
        if channel == Channel::LiveObservation {
            self.timer.cancel();
        }
    }

    /// Runs a due observation tick, if any. Drive this from the host's
    /// event loop with the same clock handed to the callbacks.
    pub fn poll(&mut self, now_millis: u64) -> Result<(), EncodeError> {
        if self.timer.fire(now_millis) {
            self.notify_observation(now_millis)?;
        }
        Ok(())
    }

    fn notify_observation(&mut self, now_millis: u64) -> Result<(), EncodeError> {
        // Interval is re-read every cycle, so a schedule change applies to
        // the next tick, never retroactively.
        let interval_millis = (self.schedule.interval_secs() * 1000.0) as u64;
        let next_millis = now_millis + interval_millis;

        let Some(transport_unit) = self.host.min_transport_unit() else {
            warn!("no connected listener, skipping observation tick");
            self.timer.arm(next_millis);
            return Ok(());
        };

        let observation = Observation {
            measurement: self.config.supported_measurement,
            unit: self.config.unit,
            value: self.config.placeholder_value,
            duration_secs: self.config.measurement_duration_secs,
        }
        .encode(now_millis / 1000)?;

        match segment_record(
            &observation,
            transport_unit.saturating_sub(PACKET_HEADER_RESERVE),
        ) {
            Ok(segments) => {
                debug!("notifying observation in {} segment(s)", segments.len());
                for segment in &segments {
                    self.host
                        .notify(Channel::LiveObservation, &segment.to_packet());
                }
            }
            Err(SegmentationError::NoViableTransportUnit) => {
                warn!(
                    "transport unit {} too small, skipping observation tick",
                    transport_unit
                );
            }
        }

        self.timer.arm(next_millis);
        Ok(())
    }
}
