use std::thread;
use std::time::Duration;

/// Inserts the duty-cycle pause between two sample batches.
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the calling thread for the whole pause.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleepPacer;

impl Pacer for ThreadSleepPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Never pauses. Used by tests and benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _duration: Duration) {}
}

impl<P: Pacer + ?Sized> Pacer for &mut P {
    fn pause(&mut self, duration: Duration) {
        (**self).pause(duration);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn thread_sleep_waits_at_least_the_duration() {
        let start = Instant::now();
        ThreadSleepPacer.pause(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn borrowed_pacer_forwards() {
        struct Counting(u32);
        impl Pacer for Counting {
            fn pause(&mut self, _duration: Duration) {
                self.0 += 1;
            }
        }

        fn pause_twice<P: Pacer>(mut pacer: P) {
            pacer.pause(Duration::ZERO);
            pacer.pause(Duration::ZERO);
        }

        let mut counting = Counting(0);
        pause_twice(&mut counting);
        assert_eq!(counting.0, 2);
    }
}
