//! Rendezvous channel round trips. Each call spawns one receiver thread,
//! sends once, closes the channel and joins the receiver.

use crate::error::OpError;
use crate::reflect::{make_chan, Type, Value};
use crossbeam_channel::bounded;
use std::thread;

pub fn make_chan_and_put(value: i64) -> Result<i64, OpError> {
    let (tx, rx) = bounded::<i64>(0);
    let worker = thread::spawn(move || rx.recv());
    tx.send(value).map_err(|_| OpError::Disconnected)?;
    drop(tx);
    worker
        .join()
        .map_err(|_| OpError::WorkerPanicked)?
        .map_err(|_| OpError::Disconnected)
}

pub fn make_chan_and_put_reflect(value: i64) -> Result<i64, OpError> {
    let mut chan = make_chan(Type::of::<i64>(), 0);
    let rx = chan.receiver();
    let worker = thread::spawn(move || rx.recv());
    chan.send(Value::of(value))?;
    chan.close();
    let received = worker.join().map_err(|_| OpError::WorkerPanicked)??;
    Ok(received.int()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_deliver_the_same_value() {
        assert_eq!(make_chan_and_put(42), Ok(42));
        assert_eq!(make_chan_and_put_reflect(42), Ok(42));
    }

    #[test]
    fn repeated_round_trips_complete() {
        for i in 0..64 {
            assert_eq!(make_chan_and_put(i), Ok(i));
            assert_eq!(make_chan_and_put_reflect(i), Ok(i));
        }
    }
}
