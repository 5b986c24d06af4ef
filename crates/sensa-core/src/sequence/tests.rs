use super::*;

#[test]
fn int_sequence_steps() {
    let values: Vec<_> = IntSequence::new().take(3).collect();
    assert_eq!(vec![77_777, 79_011, 80_245], values);
}

#[test]
fn float_sequence_steps() {
    let mut seq = FloatSequence::default();
    assert!((seq.next_value() - 9.563).abs() < f64::EPSILON);
    assert!((seq.next_value() - 10.797).abs() < 1e-9);
    assert!((seq.next_value() - 12.031).abs() < 1e-9);
}

#[test]
fn string_sequence_steps() {
    let values: Vec<_> = StringSequence::new().take(3).collect();
    assert_eq!(vec!["A1", "A2", "A3"], values);
}

#[test]
fn kinds_advance_independently() {
    let mut seqs = Sequences::new();
    assert_eq!(Value::Int(77_777), seqs.next_value(Kind::Int));
    assert_eq!(Value::from("A1"), seqs.next_value(Kind::String));
    assert_eq!(Value::Int(79_011), seqs.next_value(Kind::Int));
    assert_eq!(Value::from("A2"), seqs.next_value(Kind::String));
    assert_eq!(Value::Float(9.563), seqs.next_value(Kind::Float));
}
