// tests/hitlimiter/concurrency_tests.rs

#[cfg(test)]
mod tests {

    use crate::fixtures::test_clock::TestClock;
    use hit_limiter::{HitLimiter, HitLimiterConfig};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    fn spawn_hits(limiter: Arc<HitLimiter<TestClock>>, callers: usize) -> Vec<bool> {
        let barrier = Arc::new(Barrier::new(callers));
        let handles: Vec<_> = (0..callers)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    limiter.try_acquire()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    }

    #[test]
    fn concurrent_callers_get_exactly_limit_admissions() {
        let clock = TestClock::new(0.0);
        let config = HitLimiterConfig::new(10, Duration::from_secs(60));
        let limiter = Arc::new(HitLimiter::with_config(config, clock).unwrap());

        let verdicts = spawn_hits(Arc::clone(&limiter), 64);

        let allowed = verdicts.iter().filter(|limited| !**limited).count();
        let denied = verdicts.iter().filter(|limited| **limited).count();
        assert_eq!(allowed, 10);
        assert_eq!(denied, 54);
        assert_eq!(limiter.current_budget(), 0);
    }

    #[test]
    fn concurrent_callers_under_limit_all_admitted() {
        let clock = TestClock::new(0.0);
        let config = HitLimiterConfig::new(100, Duration::from_secs(60));
        let limiter = Arc::new(HitLimiter::with_config(config, clock).unwrap());

        let verdicts = spawn_hits(Arc::clone(&limiter), 32);

        assert!(verdicts.iter().all(|limited| !limited));
        assert_eq!(limiter.current_budget(), 68);
    }

    #[test]
    fn concurrent_hits_and_resets_keep_budget_bounded() {
        let clock = TestClock::new(0.0);
        let config = HitLimiterConfig::new(5, Duration::from_secs(1));
        let limiter = Arc::new(HitLimiter::with_config(config, clock.clone()).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let limiter = Arc::clone(&limiter);
                let clock = clock.clone();
                thread::spawn(move || {
                    for i in 0..500 {
                        if worker == 0 && i % 50 == 0 {
                            limiter.reset();
                        } else if worker == 1 && i % 25 == 0 {
                            clock.advance(0.3);
                        } else {
                            limiter.try_acquire();
                        }
                        assert!(limiter.current_budget() <= limiter.limit());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(limiter.current_budget() <= 5);
    }
}
