use proptest::prelude::*;
use qec_kernel::kernel::{Corrector, ErrorKind, KernelMetric, StabilizerCode, StateEncoder};
use qec_kernel::{KernelConfig, QuantumKernel};
use std::f64::consts::PI;

fn arbitrary_kind() -> impl Strategy<Value = ErrorKind> {
    prop::sample::select(vec![ErrorKind::BitFlip, ErrorKind::PhaseFlip, ErrorKind::Both])
}

fn arbitrary_metric() -> impl Strategy<Value = KernelMetric> {
    prop::sample::select(vec![
        KernelMetric::Fidelity,
        KernelMetric::Rescaled,
        KernelMetric::RealOverlap,
    ])
}

fn arbitrary_features(n: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10.0f64..10.0, n)
}

fn arbitrary_dataset(n: usize) -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(-PI..PI, n), 1..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn noiseless_self_kernel_is_one(x in arbitrary_features(4), seed in any::<u64>()) {
        let mut kernel = QuantumKernel::new(KernelConfig::new(4, 0.0, 0.15).with_seed(seed)).unwrap();
        let k = kernel.apply_quantum_kernel(&x, &x).unwrap();
        prop_assert!((k - 1.0).abs() < 1e-9);
        prop_assert_eq!(kernel.analyze_error_correction().corrections_attempted, 0);
    }

    #[test]
    fn seeded_kernel_is_repeatable(
        x1 in arbitrary_features(6),
        x2 in arbitrary_features(6),
        seed in any::<u64>(),
    ) {
        let mut kernel = QuantumKernel::new(KernelConfig::new(6, 0.1, 0.15).with_seed(seed)).unwrap();
        let a = kernel.apply_quantum_kernel(&x1, &x2).unwrap();
        let b = kernel.apply_quantum_kernel(&x1, &x2).unwrap();
        prop_assert_eq!(a.to_bits(), b.to_bits());
        prop_assert!((-1.0..=1.0).contains(&a));
    }

    #[test]
    fn kernel_stays_in_metric_range(
        x1 in arbitrary_features(4),
        x2 in arbitrary_features(4),
        metric in arbitrary_metric(),
        seed in any::<u64>(),
    ) {
        let config = KernelConfig::new(4, 0.2, 0.15).with_seed(seed).with_metric(metric);
        let mut kernel = QuantumKernel::new(config).unwrap();
        let k = kernel.apply_quantum_kernel(&x1, &x2).unwrap();
        prop_assert!(k >= metric.lower_bound() && k <= 1.0, "{:?} gave {}", metric, k);
    }

    #[test]
    fn matrix_is_symmetric_and_bounded(
        data in arbitrary_dataset(4),
        error_rate in 0.0f64..0.3,
        seed in any::<u64>(),
    ) {
        let config = KernelConfig::new(4, error_rate, 0.15).with_seed(seed);
        let mut kernel = QuantumKernel::new(config).unwrap();
        let m = kernel.compute_kernel_matrix(&data).unwrap();
        prop_assert_eq!(m.size(), data.len());
        prop_assert!(m.is_symmetric(0.0));
        prop_assert!(m.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));

        let stats = kernel.analyze_error_correction();
        let pairs = (data.len() * (data.len() + 1) / 2) as u64;
        prop_assert_eq!(stats.evaluations, pairs);
        prop_assert_eq!(stats.states_processed, 2 * pairs);
        prop_assert!((0.0..=1.0).contains(&stats.success_rate));
        prop_assert!(stats.corrections_succeeded <= stats.corrections_attempted);
    }

    #[test]
    fn single_error_always_clears_syndrome(
        half in 2usize..5,
        qubit_seed in any::<usize>(),
        kind in arbitrary_kind(),
    ) {
        let n = 2 * half;
        let qubit = qubit_seed % n;
        let code = StabilizerCode::new(n).unwrap();
        let clean = StateEncoder::new(n).encode(&vec![0.3; n]).unwrap();
        let noisy = clean.with_pauli(qubit, kind);

        let syndrome = code.measure_syndrome(&noisy).unwrap();
        prop_assert!(!syndrome.is_clean());

        let hypothesis = code.decode(&syndrome).unwrap();
        let correction = Corrector::new(0.15).correct(&code, &noisy, &hypothesis).unwrap();
        prop_assert!(correction.attempted);
        prop_assert!(correction.succeeded);
        prop_assert!(correction.residual.is_clean());

        let leftover = correction.state.frame().weight();
        if kind == ErrorKind::Both {
            prop_assert_eq!(hypothesis.confidence(), 1.0);
            prop_assert_eq!(leftover, 0);
        } else {
            // either the right qubit or its partner in the same check
            prop_assert!(leftover == 0 || leftover == 2);
        }
    }

    #[test]
    fn syndrome_ignores_encoded_data(
        x1 in arbitrary_features(6),
        x2 in arbitrary_features(6),
        qubit in 0usize..6,
        kind in arbitrary_kind(),
    ) {
        let code = StabilizerCode::new(6).unwrap();
        let encoder = StateEncoder::new(6);
        let a = encoder.encode(&x1).unwrap().with_pauli(qubit, kind);
        let b = encoder.encode(&x2).unwrap().with_pauli(qubit, kind);
        prop_assert_eq!(code.measure_syndrome(&a).unwrap(), code.measure_syndrome(&b).unwrap());
    }
}
