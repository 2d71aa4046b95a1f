//! Serde roundtrip and JsonSchema validation tests for entity types.

use chrono::Utc;
use schemars::schema_for;
use lgx_core::entities::*;
use lgx_core::enums::*;
use lgx_core::forms::*;
use lgx_core::refs::Ref;
use lgx_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn party(name: &str) -> Party {
    Party {
        name: name.into(),
        phone: "9876543210".into(),
        address: "12 MG Road".into(),
        city: "Pune".into(),
        pincode: "411001".into(),
    }
}

fn hub(id: &str, name: &str) -> Hub {
    Hub {
        id: id.into(),
        name: name.into(),
        code: "PNQ".into(),
        address: String::new(),
        city: "Pune".into(),
        pincode: "411001".into(),
        phone: "9876543210".into(),
        manager: None,
        is_active: true,
    }
}

roundtrip_and_validate!(
    order_roundtrip,
    Order,
    Order {
        id: "ord-1".into(),
        order_id: "DKT1001".into(),
        consignor: party("Asha Traders"),
        consignee: party("Ravi Stores"),
        items: vec![OrderItem {
            description: "carton".into(),
            length: 40.0,
            width: 30.0,
            height: 20.0,
            weight: 2.5,
            quantity: 4,
        }],
        source_hub: Some(Ref::Populated(Box::new(hub("hub-1", "Pune Central")))),
        destination_hub: Some(Ref::Id("hub-2".into())),
        current_hub: Some(Ref::Id("hub-1".into())),
        customer: None,
        payment_mode: Some(PaymentMode::Cod),
        declared_value: 2500.0,
        status: OrderStatus::Booked,
        created_at: Some(Utc::now()),
        updated_at: None,
    }
);

roundtrip_and_validate!(hub_roundtrip, Hub, hub("hub-1", "Pune Central"));

roundtrip_and_validate!(
    employee_roundtrip,
    Employee,
    Employee {
        id: "emp-1".into(),
        name: "Meera".into(),
        phone: "9876543210".into(),
        email: Some("meera@example.in".into()),
        role: EmployeeRole::DeliveryAgent,
        hub: Some(Ref::Id("hub-1".into())),
        is_active: true,
    }
);

roundtrip_and_validate!(
    loader_roundtrip,
    Loader,
    Loader {
        id: "ldr-1".into(),
        name: "Sai Transport".into(),
        phone: "9876543210".into(),
        vehicle_number: "MH12AB1234".into(),
        capacity_kg: 9000.0,
        is_active: true,
    }
);

roundtrip_and_validate!(
    route_roundtrip,
    Route,
    Route {
        id: "rte-1".into(),
        name: "PNQ-BLR".into(),
        origin_hub: Ref::Id("hub-1".into()),
        destination_hub: Ref::Id("hub-3".into()),
        stops: vec![Ref::Id("hub-2".into())],
        distance_km: 840.0,
        is_active: true,
    }
);

roundtrip_and_validate!(
    manifest_roundtrip,
    Manifest,
    Manifest {
        id: "man-1".into(),
        manifest_id: "MF-0001".into(),
        source_hub: Ref::Id("hub-1".into()),
        destination_hub: Ref::Id("hub-2".into()),
        loader: Some(Ref::Id("ldr-1".into())),
        vehicle_number: "MH12AB1234".into(),
        loader_weight: 150.0,
        orders: vec![AttachedOrder {
            order: Ref::Id("ord-1".into()),
            items: 4,
            weight: 10.0,
        }],
        status: ManifestStatus::Draft,
        created_at: Some(Utc::now()),
        updated_at: Some(Utc::now()),
    }
);

roundtrip_and_validate!(
    drs_roundtrip,
    Drs,
    Drs {
        id: "drs-1".into(),
        drs_id: "DRS-0001".into(),
        hub: Ref::Id("hub-2".into()),
        delivery_agent: Ref::Id("emp-1".into()),
        vehicle_number: "KA01A1234".into(),
        orders: Vec::new(),
        status: DrsStatus::Open,
        created_at: None,
        updated_at: None,
    }
);

roundtrip_and_validate!(
    drs_draft_roundtrip,
    DrsDraft,
    DrsDraft {
        id: None,
        hub: "hub-2".into(),
        delivery_agent: "emp-1".into(),
        vehicle_number: "KA01A1234".into(),
        orders: Vec::new(),
    }
);

roundtrip_and_validate!(
    batch_build_response_roundtrip,
    BatchBuildResponse,
    BatchBuildResponse {
        kind: BatchKind::Manifest,
        id: Some("man-1".into()),
        submitted: true,
        created: false,
        totals: BatchTotals {
            orders: 2,
            items: 5,
            weight: 14.5,
        },
        attached: vec!["ord-1".into(), "ord-2".into()],
        staged: Vec::new(),
        pending_remaining: 3,
    }
);

roundtrip_and_validate!(
    status_change_roundtrip,
    StatusChangeResponse,
    StatusChangeResponse {
        id: "ord-1".into(),
        order_id: "DKT1001".into(),
        from: OrderStatus::ReachedHub,
        to: OrderStatus::OutForDelivery,
    }
);
