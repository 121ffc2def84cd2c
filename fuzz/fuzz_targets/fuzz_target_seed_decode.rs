#![no_main]
use libfuzzer_sys::fuzz_target;
use localpass::vault::codec::JsonSeedCodec;
use localpass::vault::ports::SeedCodec;

fuzz_target!(|data: &[u8]| {
    // Decoder must not panic on arbitrary inputs
    let _ = JsonSeedCodec.decode(data);
});
