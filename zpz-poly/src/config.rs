//! Runtime tuning knobs. None of them change results, only how work is
//! scheduled.
//!
//! Each knob is stored per thread and can be overridden from the environment.
//! An environment variable, if present and parseable, wins over any value set
//! through this module.

use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<Settings> = RefCell::new(Settings::from_env());
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct Settings {
    evaluation_cutoff: EvaluationCutoff,
}

impl Settings {
    fn from_env() -> Self {
        Self {
            evaluation_cutoff: EvaluationCutoff::resolve(None),
        }
    }
}

/// Smallest number of evaluation points worth spreading over the rayon pool.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct EvaluationCutoff(usize);

impl EvaluationCutoff {
    const ENV_VAR: &'static str = "ZPZ_POLY_PARALLEL_EVALUATION_CUTOFF";
    const DEFAULT: usize = 64;
    const MINIMUM: usize = 1;

    /// Environment first, then `requested`, then the default. Never below
    /// the minimum.
    fn resolve(requested: Option<usize>) -> Self {
        let from_env = std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| value.parse().ok());
        let cutoff = from_env
            .or(requested)
            .unwrap_or(Self::DEFAULT)
            .max(Self::MINIMUM);

        Self(cutoff)
    }
}

/// Number of points from which on [`par_batch_evaluate`] and
/// [`par_check_by_evaluation`] actually run in parallel. Below it, they fall
/// back to their sequential counterparts.
///
/// Ignored if `ZPZ_POLY_PARALLEL_EVALUATION_CUTOFF` is set. Defaults to 64;
/// values below 1 are raised to 1.
///
/// [`par_batch_evaluate`]: crate::math::polynomial::Polynomial::par_batch_evaluate
/// [`par_check_by_evaluation`]: crate::math::evaluation_check::ArithmeticResults::par_check_by_evaluation
pub fn set_parallel_evaluation_cutoff(cutoff: usize) {
    let cutoff = EvaluationCutoff::resolve(Some(cutoff));
    SETTINGS.with(|settings| settings.borrow_mut().evaluation_cutoff = cutoff);
}

pub(crate) fn parallel_evaluation_cutoff() -> usize {
    SETTINGS.with(|settings| settings.borrow().evaluation_cutoff.0)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn cutoff_never_drops_below_minimum() {
        if std::env::var(EvaluationCutoff::ENV_VAR).is_ok() {
            return;
        }

        set_parallel_evaluation_cutoff(0);
        assert_eq!(EvaluationCutoff::MINIMUM, parallel_evaluation_cutoff());

        set_parallel_evaluation_cutoff(17);
        assert_eq!(17, parallel_evaluation_cutoff());
    }

    #[test]
    fn fresh_thread_starts_from_default() {
        if std::env::var(EvaluationCutoff::ENV_VAR).is_ok() {
            return;
        }

        set_parallel_evaluation_cutoff(5);
        let cutoff_elsewhere = std::thread::spawn(parallel_evaluation_cutoff)
            .join()
            .unwrap();
        assert_eq!(EvaluationCutoff::DEFAULT, cutoff_elsewhere);
    }
}
