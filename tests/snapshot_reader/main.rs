
use snapshot_source::{
    InMemoryStreamSource, JsonSnapshotDeserializer, PassThroughStreamNameResolver,
    PrefixedStreamNameResolver, ReadConfiguration, RecordedEvent, SnapshotReadError,
    SnapshotReader, StreamName,
};
use support::{AccountSnapshot, CountingStreamSource, FailingStreamSource};

fn snapshot_record(sequence: u64, version: u64, balance: i64) -> RecordedEvent {
    let payload = format!(r#"{{"version":{},"balance":{}}}"#, version, balance);
    RecordedEvent::new("snapshot_taken", payload.into_bytes(), sequence)
}

fn pass_through_reader(
    source: InMemoryStreamSource,
) -> SnapshotReader<
    InMemoryStreamSource,
    PassThroughStreamNameResolver,
    JsonSnapshotDeserializer<AccountSnapshot>,
> {
    SnapshotReader::new(
        source,
        ReadConfiguration::new(
            PassThroughStreamNameResolver,
            JsonSnapshotDeserializer::new(),
        ),
    )
}

#[test]
fn absent_stream_reads_none() {
    let reader = pass_through_reader(InMemoryStreamSource::new());
    assert_eq!(reader.read_optional("account-1").unwrap(), None);
}

#[test]
fn deleted_stream_reads_none() {
    let source = InMemoryStreamSource::new();
    source.append("account-1", snapshot_record(0, 1, 50)).unwrap();
    source.tombstone("account-1").unwrap();
    let reader = pass_through_reader(source);
    assert_eq!(reader.read_optional("account-1").unwrap(), None);
}

#[test]
fn stream_with_zero_records_reads_none() {
    let source = InMemoryStreamSource::new();
    source.create_empty("account-1").unwrap();
    let reader = pass_through_reader(source);
    assert_eq!(reader.read_optional("account-1").unwrap(), None);
}

#[test]
fn only_the_most_recent_record_is_read() {
    let source = InMemoryStreamSource::new();
    for sequence in 0..5 {
        // Earlier records carry earlier versions; only sequence 4 may win
        source
            .append("account-1", snapshot_record(sequence, sequence + 1, 10 * sequence as i64))
            .unwrap();
    }
    let counting = CountingStreamSource::new(source);
    let reader = SnapshotReader::new(
        counting,
        ReadConfiguration::new(
            PassThroughStreamNameResolver,
            JsonSnapshotDeserializer::<AccountSnapshot>::new(),
        ),
    );

    let snapshot = reader.read_optional("account-1").unwrap();
    assert_eq!(
        snapshot,
        Some(AccountSnapshot {
            version: 5,
            balance: 40
        })
    );
    assert_eq!(reader.connection().reads(), 1);
}

#[test]
fn empty_identifier_fails_without_a_store_call() {
    let counting = CountingStreamSource::new(InMemoryStreamSource::new());
    let reader = SnapshotReader::new(
        counting,
        ReadConfiguration::new(
            PassThroughStreamNameResolver,
            JsonSnapshotDeserializer::<AccountSnapshot>::new(),
        ),
    );

    let err = reader.read_optional("").unwrap_err();
    assert!(matches!(err, SnapshotReadError::InvalidIdentifier(_)));
    assert_eq!(reader.connection().reads(), 0);
}

#[test]
fn corrupt_record_propagates_as_deserialize_error() {
    let source = InMemoryStreamSource::new();
    source
        .append(
            "account-1",
            RecordedEvent::new("snapshot_taken", b"{not json".to_vec(), 0),
        )
        .unwrap();
    let reader = pass_through_reader(source);
    let err = reader.read_optional("account-1").unwrap_err();
    assert!(matches!(err, SnapshotReadError::Deserialize(_)));
}

#[test]
fn transport_failure_propagates_unchanged() {
    let reader = SnapshotReader::new(
        FailingStreamSource,
        ReadConfiguration::new(
            PassThroughStreamNameResolver,
            JsonSnapshotDeserializer::<AccountSnapshot>::new(),
        ),
    );
    let err = reader.read_optional("account-1").unwrap_err();
    assert_eq!(err, SnapshotReadError::Transport("connection reset".into()));
}

#[test]
fn reads_are_idempotent_against_an_unchanged_store() {
    let source = InMemoryStreamSource::new();
    source.append("account-1", snapshot_record(0, 3, 75)).unwrap();
    let reader = pass_through_reader(source);

    let first = reader.read_optional("account-1").unwrap();
    let second = reader.read_optional("account-1").unwrap();
    assert_eq!(first, second);

    // The same holds for absent streams: two empty results are equal
    let absent_first = reader.read_optional("account-2").unwrap();
    let absent_second = reader.read_optional("account-2").unwrap();
    assert_eq!(absent_first, absent_second);
    assert_eq!(absent_first, None);
}

#[test]
fn prefixed_resolution_reads_the_category_stream() {
    let source = InMemoryStreamSource::new();
    source
        .append("orderSnapshots-order-42", snapshot_record(0, 2, 100))
        .unwrap();

    let reader = SnapshotReader::new(
        source.clone(),
        ReadConfiguration::new(
            PrefixedStreamNameResolver::new("orderSnapshots"),
            JsonSnapshotDeserializer::<AccountSnapshot>::new(),
        ),
    );

    assert_eq!(
        reader.read_optional("order-42").unwrap(),
        Some(AccountSnapshot {
            version: 2,
            balance: 100
        })
    );

    // A record under the bare identifier must not satisfy the prefixed read
    source.append("order-43", snapshot_record(0, 9, 1)).unwrap();
    assert_eq!(reader.read_optional("order-43").unwrap(), None);
}

#[test]
fn resolver_rejection_propagates_before_the_store() {
    let counting = CountingStreamSource::new(InMemoryStreamSource::new());
    let reader = SnapshotReader::new(
        counting,
        ReadConfiguration::new(
            PrefixedStreamNameResolver::new("orderSnapshots"),
            JsonSnapshotDeserializer::<AccountSnapshot>::new(),
        ),
    );
    assert!(reader.read_optional("").is_err());
    assert_eq!(reader.connection().reads(), 0);
}

#[test]
fn stream_name_is_opaque_to_the_reader() {
    // Two readers over the same store with different resolvers see
    // different streams for the same identifier
    let source = InMemoryStreamSource::new();
    source.append(StreamName::new("a-1"), snapshot_record(0, 1, 1)).unwrap();
    source
        .append(StreamName::new("accounts-a-1"), snapshot_record(0, 2, 2))
        .unwrap();

    let plain = pass_through_reader(source.clone());
    let prefixed = SnapshotReader::new(
        source,
        ReadConfiguration::new(
            PrefixedStreamNameResolver::new("accounts"),
            JsonSnapshotDeserializer::<AccountSnapshot>::new(),
        ),
    );

    assert_eq!(
        plain.read_optional("a-1").unwrap().unwrap().version,
        1
    );
    assert_eq!(
        prefixed.read_optional("a-1").unwrap().unwrap().version,
        2
    );
}
