use mrle::{decode, encode, RleConfig};
use rand::Rng;

fn main() {
	let config = RleConfig::default();
	let mut rng = rand::thread_rng();

	// Random but repeated data, keeping the marker byte out of the payload
	let mut data = Vec::new();
	for _ in 0..100 {
		let value = loop {
			let v: u8 = rng.gen();
			if v != config.marker {
				break v;
			}
		};
		let len = rng.gen::<u8>() as usize;
		data.extend(std::iter::repeat(value).take(len));
	}

	println!("Raw data size     {:8}", data.len());

	let encoded = encode(&data, &config);
	println!("RLE encoded size  {:8}", encoded.len());

	match decode(&encoded, &config) {
		Ok(restored) => println!("RLE decoded size  {:8}", restored.len()),
		Err(e) => eprintln!("ERROR {e}"),
	}
}
