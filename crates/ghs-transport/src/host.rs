use std::hash::Hash;

use ghs_core::Channel;

/// Host contract the service core is wired against.
///
/// Sends are fire-and-forget from the core's perspective; retry and
/// backpressure for the underlying link belong to the host.
pub trait GattHost {
    /// Opaque handle for one connected listener.
    type ListenerId: Clone + Eq + Hash;

    /// Best-effort notification to every listener subscribed to `channel`.
    fn notify(&mut self, channel: Channel, bytes: &[u8]);

    /// Best-effort notification to one specific listener.
    fn notify_listener(&mut self, listener: &Self::ListenerId, channel: Channel, bytes: &[u8]);

    /// Currently connected listeners, regardless of channel subscriptions.
    fn listeners(&self) -> Vec<Self::ListenerId>;

    /// Smallest negotiated transport unit across all connected listeners,
    /// `None` when nothing is connected.
    fn min_transport_unit(&self) -> Option<usize>;
}

/// Delivery record captured by [`InMemoryHost`].
///
/// `listener` is `None` for channel-wide broadcasts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub listener: Option<String>,
    pub channel: Channel,
    pub bytes: Vec<u8>,
}

/// In-memory host for tests and simulations.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    connected: Vec<(String, usize)>,
    deliveries: Vec<Delivery>,
}

impl InMemoryHost {
    /// Registers a connected listener with its negotiated transport unit.
    pub fn connect(&mut self, listener: impl Into<String>, transport_unit: usize) {
        self.connected.push((listener.into(), transport_unit));
    }

    /// Drops a listener; pending captured deliveries are kept.
    pub fn disconnect(&mut self, listener: &str) {
        self.connected.retain(|(id, _)| id != listener);
    }

    /// Drains and returns all deliveries captured so far.
    pub fn take_deliveries(&mut self) -> Vec<Delivery> {
        std::mem::take(&mut self.deliveries)
    }
}

impl GattHost for InMemoryHost {
    type ListenerId = String;

    fn notify(&mut self, channel: Channel, bytes: &[u8]) {
        self.deliveries.push(Delivery {
            listener: None,
            channel,
            bytes: bytes.to_vec(),
        });
    }

    fn notify_listener(&mut self, listener: &Self::ListenerId, channel: Channel, bytes: &[u8]) {
        self.deliveries.push(Delivery {
            listener: Some(listener.clone()),
            channel,
            bytes: bytes.to_vec(),
        });
    }

    fn listeners(&self) -> Vec<Self::ListenerId> {
        self.connected.iter().map(|(id, _)| id.clone()).collect()
    }

    fn min_transport_unit(&self) -> Option<usize> {
        self.connected.iter().map(|(_, unit)| *unit).min()
    }
}
