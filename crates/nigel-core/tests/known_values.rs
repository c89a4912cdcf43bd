//! Validator → engine pipeline against published prime sums (OEIS A046731)
//! and prime counts (OEIS A006880), up to the default ceiling.

use nigel_core::{NigelError, PrimeSumEngine, ValidationError, Validator, DEFAULT_MAX_N};

fn nigel(raw: Option<&str>) -> Result<(u64, usize), NigelError> {
    let input = Validator::default().validate(raw)?;
    let result = PrimeSumEngine::new().compute(input)?;
    Ok((result.nigel_number(), result.primes_found().len()))
}

#[test]
fn powers_of_ten() {
    let cases: [(&str, u64, usize); 7] = [
        ("10", 17, 4),
        ("100", 1_060, 25),
        ("1000", 76_127, 168),
        ("10000", 5_736_396, 1_229),
        ("100000", 454_396_537, 9_592),
        ("1000000", 37_550_402_023, 78_498),
        ("10000000", 3_203_324_994_356, 664_579),
    ];
    for (raw, sum, count) in cases {
        assert_eq!(nigel(Some(raw)).unwrap(), (sum, count), "n = {raw}");
    }
}

#[test]
fn sum_exceeds_32_bits_at_ceiling() {
    let (sum, _) = nigel(Some(&DEFAULT_MAX_N.to_string())).unwrap();
    assert!(sum > u64::from(u32::MAX));
}

#[test]
fn validation_errors_short_circuit() {
    assert_eq!(
        nigel(None),
        Err(NigelError::Validation(ValidationError::MissingParameter))
    );
    assert_eq!(
        nigel(Some("abc")),
        Err(NigelError::Validation(ValidationError::InvalidType))
    );
    assert_eq!(
        nigel(Some("-5")),
        Err(NigelError::Validation(ValidationError::NonPositive))
    );
    assert_eq!(
        nigel(Some("0")),
        Err(NigelError::Validation(ValidationError::NonPositive))
    );
    assert_eq!(
        nigel(Some("10000001")),
        Err(NigelError::Validation(ValidationError::ExceedsMaximum {
            max_n: DEFAULT_MAX_N
        }))
    );
}

#[test]
fn concurrent_callers_are_independent() {
    let handles: Vec<_> = (1..=8u64)
        .map(|k| {
            std::thread::spawn(move || {
                let raw = (k * 1_000).to_string();
                nigel(Some(&raw)).unwrap()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0], (76_127, 168));
    for (k, result) in results.iter().enumerate() {
        assert_eq!(*result, nigel(Some(&((k as u64 + 1) * 1_000).to_string())).unwrap());
    }
}
