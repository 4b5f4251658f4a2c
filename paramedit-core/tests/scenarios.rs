use paramedit_core::action::{Action, ModelAction, ParamAction};
use paramedit_core::dispatch::dispatch_action;
use paramedit_core::labels;
use paramedit_core::model::Model;
use paramedit_core::seed::SessionSeed;
use paramedit_core::state::{EditorState, IdPolicy, ParamValue, RenderTrigger};

fn scenario_one() -> EditorState {
    SessionSeed::builtin()
        .expect("builtin seed parses")
        .into_state(IdPolicy::Monotonic)
}

fn apply(state: &mut EditorState, action: Action) {
    dispatch_action(&action, state);
}

fn get_model(state: &mut EditorState) -> String {
    apply(state, Action::Model(ModelAction::Render));
    state.output.clone()
}

#[test]
fn scenario_1_initial_state_renders_both_pairs() {
    let mut state = scenario_one();
    let out = get_model(&mut state);

    let model: Model = serde_json::from_str(&out).expect("output is JSON");
    assert_eq!(
        model.param_values,
        vec![ParamValue::new(1, "повседневное"), ParamValue::new(2, "макси")]
    );
    assert!(model.colors.is_empty());
}

#[test]
fn scenario_2_cleared_value_blocks_render() {
    let mut state = scenario_one();
    apply(&mut state, Action::Param(ParamAction::SetValue(2, String::new())));

    assert_eq!(state.render_trigger(), RenderTrigger::Disabled);
    assert_eq!(get_model(&mut state), labels::FILL_ALL_PARAMS);
}

#[test]
fn scenario_3_added_param_must_be_filled() {
    let mut state = scenario_one();
    apply(&mut state, Action::Param(ParamAction::Add("Цвет".to_string())));

    let added = state.params().last().expect("param added").clone();
    assert_eq!(added.id, 3);
    assert_eq!(added.name, "Цвет");
    assert_eq!(state.values().entries().last(), Some(&ParamValue::empty(3)));
    assert_eq!(get_model(&mut state), labels::FILL_ALL_PARAMS);

    apply(&mut state, Action::Param(ParamAction::SetValue(3, "синий".to_string())));
    let model: Model = serde_json::from_str(&get_model(&mut state)).expect("output is JSON");
    assert_eq!(model.param_values.len(), 3);
    assert_eq!(model.param_values[2], ParamValue::new(3, "синий"));
}

#[test]
fn scenario_4_removed_param_leaves_output() {
    let mut state = scenario_one();
    apply(&mut state, Action::Param(ParamAction::Delete(1)));

    assert!(state.values().get(1).is_none());
    let model: Model = serde_json::from_str(&get_model(&mut state)).expect("output is JSON");
    assert_eq!(model.param_values, vec![ParamValue::new(2, "макси")]);
}

#[test]
fn validation_gating_whitespace_only() {
    let mut state = scenario_one();
    apply(&mut state, Action::Param(ParamAction::SetValue(1, " \t ".to_string())));
    assert_eq!(get_model(&mut state), labels::FILL_ALL_PARAMS);

    apply(&mut state, Action::Param(ParamAction::SetValue(1, " a ".to_string())));
    let out = get_model(&mut state);
    assert_ne!(out, labels::FILL_ALL_PARAMS);
    assert!(out.contains("\" a \""));
}

#[test]
fn colors_survive_session() {
    let seed = SessionSeed::from_json(
        r##"{
            "params": [{"id": 1, "name": "Назначение", "type": "string"}],
            "model": {
                "paramValues": [{"paramId": 1, "value": "повседневное"}],
                "colors": [{"name": "red", "hex": "#f00"}, 7, null, ["a", "b"]]
            }
        }"##,
    )
    .expect("seed parses");
    let expected = seed.model.colors.clone();
    let mut state = seed.into_state(IdPolicy::Monotonic);

    apply(&mut state, Action::Param(ParamAction::Add("Длина".to_string())));
    apply(&mut state, Action::Param(ParamAction::SetValue(2, "макси".to_string())));
    apply(&mut state, Action::Param(ParamAction::Delete(1)));

    let model: Model = serde_json::from_str(&get_model(&mut state)).expect("output is JSON");
    assert_eq!(model.colors, expected);
}

#[test]
fn count_plus_one_policy_reuses_ids() {
    let mut state = SessionSeed::builtin()
        .expect("builtin seed parses")
        .into_state(IdPolicy::CountPlusOne);

    apply(&mut state, Action::Param(ParamAction::Delete(2)));
    apply(&mut state, Action::Param(ParamAction::Add("Цвет".to_string())));
    assert_eq!(state.params().last().map(|p| p.id), Some(2));

    let mut monotonic = scenario_one();
    apply(&mut monotonic, Action::Param(ParamAction::Delete(2)));
    apply(&mut monotonic, Action::Param(ParamAction::Add("Цвет".to_string())));
    assert_eq!(monotonic.params().last().map(|p| p.id), Some(3));
}
