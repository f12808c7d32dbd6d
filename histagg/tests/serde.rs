use assert2::check;
use histagg::{Descriptor, InstrumentKind, Number, NumberKind, allocate};
use serde_json::json;

#[test]
fn snapshot_serializes_for_exporters() {
    let desc = Descriptor::new("payload.size", InstrumentKind::ValueRecorder, NumberKind::Int64)
        .with_unit("By");
    let batch = allocate(2, desc, &[1024.0, 64.0]).unwrap();
    for v in [10, 64, 2000] {
        batch[0].record(Number::Int64(v)).unwrap();
    }
    batch[0].checkpoint(&batch[1]).unwrap();

    let value = serde_json::to_value(batch[1].snapshot()).unwrap();
    check!(
        value
            == json!({
                "sum": 2074,
                "count": 3,
                "buckets": {
                    "boundaries": [64.0, 1024.0],
                    "counts": [1, 1, 1],
                }
            })
    );
}

#[test]
fn float_sums_serialize_as_floats() {
    let desc = Descriptor::new("ratio", InstrumentKind::ValueObserver, NumberKind::Float64);
    let agg = &allocate(1, desc, &[]).unwrap()[0];
    agg.record(Number::Float64(0.25)).unwrap();
    let value = serde_json::to_value(agg.snapshot()).unwrap();
    check!(value["sum"] == json!(0.25));
    check!(value["buckets"]["counts"] == json!([1]));
}

#[test]
fn descriptor_serializes_metadata() {
    let desc = Descriptor::new("queue.depth", InstrumentKind::UpDownCounter, NumberKind::Int64)
        .with_description("items waiting");
    let value = serde_json::to_value(&desc).unwrap();
    check!(value["name"] == "queue.depth");
    check!(value["instrument_kind"] == "UpDownCounter");
    check!(value["number_kind"] == "Int64");
    check!(value["description"] == "items waiting");
    check!(value["unit"].is_null());
}
