use super::types::Type;
use super::value::Value;
use crate::error::ReflectError;
use crossbeam_channel::{bounded, Receiver, Sender};

/// Channel whose element type is only known at runtime. Capacity 0 makes
/// every send a rendezvous with a receiver.
#[derive(Debug)]
pub struct ChanValue {
    elem: Type,
    tx: Option<Sender<Value>>,
    rx: Receiver<Value>,
}

/// Receiving half handed to another thread.
#[derive(Debug, Clone)]
pub struct ChanReceiver {
    elem: Type,
    rx: Receiver<Value>,
}

pub fn make_chan(elem: Type, cap: usize) -> ChanValue {
    let (tx, rx) = bounded(cap);
    ChanValue {
        elem,
        tx: Some(tx),
        rx,
    }
}

impl ChanValue {
    pub fn elem(&self) -> Type {
        self.elem
    }

    pub fn receiver(&self) -> ChanReceiver {
        ChanReceiver {
            elem: self.elem,
            rx: self.rx.clone(),
        }
    }

    pub fn send(&self, value: Value) -> Result<(), ReflectError> {
        self.elem.expect(&value.ty())?;
        let tx = self.tx.as_ref().ok_or(ReflectError::ChannelClosed)?;
        tx.send(value).map_err(|_| ReflectError::ChannelClosed)
    }

    /// Blocks until a value arrives. Fails once the channel is closed and
    /// drained.
    pub fn recv(&self) -> Result<Value, ReflectError> {
        self.rx.recv().map_err(|_| ReflectError::ChannelClosed)
    }

    pub fn close(&mut self) {
        self.tx = None;
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_none()
    }
}

impl ChanReceiver {
    pub fn elem(&self) -> Type {
        self.elem
    }

    pub fn recv(&self) -> Result<Value, ReflectError> {
        self.rx.recv().map_err(|_| ReflectError::ChannelClosed)
    }
}
