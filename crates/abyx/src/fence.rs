//! # Frame Fence
//!
//! Hands finished draw lists from the simulation thread to a render thread.
//! A list crosses the fence by value once its tick is over, so the render
//! side only ever sees complete, immutable frames.
//!
//! The channel is bounded: when the render thread falls `depth` frames
//! behind, `submit` blocks until it catches up. Dropping the
//! [`FrameSubmitter`] ends the consumer's iteration.

use abyx_ui::DrawList;
use crossbeam_channel::{bounded, Receiver, Sender};

/// A draw list whose tick has finished.
#[derive(Debug)]
pub struct CompletedFrame {
    /// Tick number.
    pub index: u64,
    /// Everything the tick drew.
    pub draw_list: DrawList,
}

/// Creates a fence holding at most `depth` frames in flight.
#[must_use]
pub fn frame_fence(depth: usize) -> (FrameSubmitter, FrameConsumer) {
    let (sender, receiver) = bounded(depth);
    (FrameSubmitter { sender }, FrameConsumer { receiver })
}

/// Simulation side of the fence.
pub struct FrameSubmitter {
    sender: Sender<CompletedFrame>,
}

impl FrameSubmitter {
    /// Passes a finished frame on. Returns `false` if the consumer is gone.
    pub fn submit(&self, index: u64, draw_list: DrawList) -> bool {
        self.sender
            .send(CompletedFrame { index, draw_list })
            .is_ok()
    }
}

/// Render side of the fence.
pub struct FrameConsumer {
    receiver: Receiver<CompletedFrame>,
}

impl FrameConsumer {
    /// Waits for the next frame. `None` once the submitter is dropped and
    /// every frame has been taken.
    #[must_use]
    pub fn recv(&self) -> Option<CompletedFrame> {
        self.receiver.recv().ok()
    }

    /// Blocking iterator over frames until the submitter is dropped.
    pub fn frames(&self) -> impl Iterator<Item = CompletedFrame> + '_ {
        self.receiver.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abyx_shared::Vec2;
    use abyx_ui::{Color, Renderer};
    use std::thread;

    #[test]
    fn test_frames_cross_in_order() {
        let (submitter, consumer) = frame_fence(2);
        let render = thread::spawn(move || {
            consumer
                .frames()
                .map(|frame| (frame.index, frame.draw_list.len()))
                .collect::<Vec<_>>()
        });

        for index in 0..5_u64 {
            let mut list = DrawList::new();
            for _ in 0..index {
                list.submit_rect(Vec2::ZERO, Vec2::ONE, Color::WHITE);
            }
            assert!(submitter.submit(index, list));
        }
        drop(submitter);

        let seen = render.join().unwrap();
        assert_eq!(seen, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_submit_fails_without_consumer() {
        let (submitter, consumer) = frame_fence(1);
        drop(consumer);
        assert!(!submitter.submit(0, DrawList::new()));
    }
}
