use bitfec::bits::BitSeq;
use bitfec::ecc::hamming::HammingCode;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_encode(c: &mut Criterion) {
    let code_7_4 = HammingCode::standard_7_4();
    let data_4 = BitSeq::from_bits(&[1, 0, 0, 1]).unwrap();

    c.bench_function("hamming_7_4_encode", |b| {
        b.iter(|| code_7_4.encode(black_box(&data_4)).unwrap())
    });

    let code_15_11 = HammingCode::new(15, 11).unwrap();
    let data_11 = BitSeq::from_bits(&[1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0]).unwrap();

    c.bench_function("hamming_15_11_encode", |b| {
        b.iter(|| code_15_11.encode(black_box(&data_11)).unwrap())
    });
}

fn bench_decode(c: &mut Criterion) {
    let code_7_4 = HammingCode::standard_7_4();
    let data_4 = BitSeq::from_bits(&[1, 0, 0, 1]).unwrap();
    let mut received_7 = code_7_4.encode(&data_4).unwrap();
    received_7.flip(2);

    c.bench_function("hamming_7_4_decode_corrupted", |b| {
        b.iter(|| code_7_4.decode(black_box(&received_7)).unwrap())
    });

    let code_15_11 = HammingCode::new(15, 11).unwrap();
    let data_11 = BitSeq::from_bits(&[1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0]).unwrap();
    let received_15 = code_15_11.encode(&data_11).unwrap();

    c.bench_function("hamming_15_11_decode_clean", |b| {
        b.iter(|| code_15_11.decode(black_box(&received_15)).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
