//! End-to-end walk through an energy-market ledger: the TTP bootstraps,
//! registers itself, mints twice, and a household probes the ledger.

use ledger_engine::{
    ErrorKind, FixedCaller, InMemoryStateStore, Invocation, LedgerConfig, LedgerEngine, Principal,
    StateStore,
};

fn engine<'a>(
    store: &'a InMemoryStateStore,
    caller: &'a FixedCaller,
) -> LedgerEngine<'a, InMemoryStateStore, FixedCaller> {
    LedgerEngine::new(store, caller, LedgerConfig::default())
}

#[test]
fn ttp_lifecycle() {
    let store = InMemoryStateStore::new();
    let ttp = FixedCaller::new("TTPOrg");
    let household = FixedCaller::new("Household1");

    // 1. bootstrap records the TTP
    let admin = engine(&store, &ttp).bootstrap().unwrap();
    assert_eq!(admin, Principal::from("TTPOrg"));
    assert_eq!(store.get_state(b"ttp").unwrap(), Some(b"TTPOrg".to_vec()));

    // 2. registration writes a zero balance
    engine(&store, &ttp).register_account().unwrap();
    assert_eq!(store.get_state(b"TTPOrg").unwrap(), Some(b"0".to_vec()));

    // 3. and 4. mints accumulate
    engine(&store, &ttp).mint_and_credit(&["50"]).unwrap();
    assert_eq!(store.get_state(b"TTPOrg").unwrap(), Some(b"50".to_vec()));
    engine(&store, &ttp).mint_and_credit(&["25"]).unwrap();
    assert_eq!(store.get_state(b"TTPOrg").unwrap(), Some(b"75".to_vec()));

    // 5. a household cannot mint
    let before = store.snapshot().unwrap();
    let err = engine(&store, &household)
        .mint_and_credit(&["10"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unauthorized);
    assert_eq!(store.snapshot().unwrap(), before);

    // 6. anyone can query; unknown accounts are not found
    let as_household = engine(&store, &household);
    assert_eq!(as_household.get_balance(&["TTPOrg"]).unwrap(), b"75".to_vec());
    assert_eq!(
        as_household.get_balance(&["Household1"]).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn ttp_lifecycle_through_host_entry_points() {
    let store = InMemoryStateStore::new();
    let ttp = FixedCaller::new("TTPOrg");
    let household = FixedCaller::new("Household1");
    let no_args: [&str; 0] = [];

    let init = engine(&store, &ttp).init();
    assert!(init.is_success());
    assert_eq!(init.payload.as_deref(), Some(b"TTPOrg".as_slice()));

    let steps = [
        Invocation::new("registerHousehold", no_args),
        Invocation::new("mintEuroToken", ["50"]),
        Invocation::new("mintEuroToken", ["25"]),
    ];
    for step in &steps {
        let response = engine(&store, &ttp).invoke(step);
        assert!(response.is_success(), "{step:?}: {}", response.message);
        assert!(response.payload.is_none());
    }

    let denied = engine(&store, &household).invoke(&Invocation::new("mintEuroToken", ["10"]));
    assert!(!denied.is_success());

    let balance =
        engine(&store, &household).invoke(&Invocation::new("getEuroTokenBalance", ["TTPOrg"]));
    assert_eq!(balance.payload.as_deref(), Some(b"75".as_slice()));

    let missing =
        engine(&store, &household).invoke(&Invocation::new("getEuroTokenBalance", ["Household1"]));
    assert!(!missing.is_success());
    assert!(missing.message.contains("Household1"));
}

#[test]
fn ledger_survives_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");
    let ttp = FixedCaller::new("TTPOrg");

    {
        let store = ledger_engine::JsonFileStateStore::open(&path).unwrap();
        let engine = LedgerEngine::new(&store, &ttp, LedgerConfig::default());
        engine.bootstrap().unwrap();
        engine.register_account().unwrap();
        engine.mint_and_credit(&["42"]).unwrap();
    }

    let store = ledger_engine::JsonFileStateStore::open(&path).unwrap();
    let engine = LedgerEngine::new(&store, &ttp, LedgerConfig::default());
    assert_eq!(engine.get_balance(&["TTPOrg"]).unwrap(), b"42".to_vec());
    assert!(engine.caller_is_administrator().unwrap());
}
