use bitfec::bits::BitSeq;
use bitfec::ecc::fletcher::{exists_error, Fletcher3};
use bitfec::ecc::hamming::HammingCode;

fn main() {
    // Classic (7,4) round trip: encode, checksum, corrupt one bit, detect,
    // correct, recover
    let data = BitSeq::from_bits(&[1, 0, 0, 1]).unwrap();
    let code = HammingCode::standard_7_4();

    let encoded = code.encode(&data).unwrap();
    println!("Original data:  {}", data);
    println!("Hamming code:   {}", encoded);

    let sent_checksum = Fletcher3::compute(&encoded);
    println!("Checksum:       {}", sent_checksum);
    println!("Error present:  {}", exists_error(&sent_checksum, &sent_checksum));

    // Simulate a transmission error on the third bit
    let mut received = encoded.clone();
    received.flip(2);
    println!("Received:       {}", received);

    let received_checksum = Fletcher3::compute(&received);
    println!("Checksum:       {}", received_checksum);
    println!(
        "Error present:  {}",
        exists_error(&sent_checksum, &received_checksum)
    );

    let decoded = code.decode(&received).unwrap();
    if let Some(index) = decoded.corrected {
        println!("Corrected bit:  {}", index);
    }
    println!("Recovered data: {}", decoded.data);
    assert_eq!(decoded.data, data);
    println!("Success!");
}
