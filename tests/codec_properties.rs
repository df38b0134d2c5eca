//! Property tests over generated record collections

use proptest::prelude::*;
use record_codec_bench::prelude::{
    generate, seeded_rng, Codec, CodecKind, JsonCodec, ProstSchema, Record, SchemaCodec,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generator_length_and_shape(count in 0usize..500, seed in any::<u64>()) {
        let records = generate(count, &mut seeded_rng(Some(seed)));

        prop_assert_eq!(records.len(), count);
        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(&record.name, &format!("User{}", i));
            prop_assert_eq!(&record.email, &format!("user{}@example.com", i));
            prop_assert!(record.age < 100);
        }
    }

    #[test]
    fn schema_binary_never_larger_than_text(count in 1usize..300, seed in any::<u64>()) {
        let records = generate(count, &mut seeded_rng(Some(seed)));

        let json_len = JsonCodec::new().encode(&records).unwrap().len();
        let proto_len = SchemaCodec::<ProstSchema>::new().encode(&records).unwrap().len();
        prop_assert!(proto_len <= json_len, "protobuf {} > json {}", proto_len, json_len);
    }

    #[test]
    fn arbitrary_records_round_trip(
        raw in prop::collection::vec((".{0,24}", 0u8..=255, ".{0,24}"), 0..40)
    ) {
        let records: Vec<Record> = raw
            .into_iter()
            .map(|(name, age, email)| Record { name, age, email })
            .collect();

        for kind in CodecKind::ALL {
            let mut codec = kind.build();
            let encoded = codec.encode(&records).unwrap().to_vec();
            prop_assert_eq!(&codec.decode(&encoded).unwrap(), &records);
        }
    }
}
