use std::cell::RefCell;
use std::rc::Rc;

use datesel::{
    Date, DateSelectionEvent, DateValue, MonthGrid, SelectionConfig, SelectionMode,
    SelectionModel,
};

fn date(year: i32, month: u8, day: u8) -> Date {
    Date::from_parts(year, month, day).expect("valid date")
}

/// Records the selection each listener call observed.
fn recorder(model: &mut SelectionModel) -> Rc<RefCell<Vec<Vec<Date>>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    model.add_date_selection_listener(move |event: &DateSelectionEvent<'_>| {
        sink.borrow_mut().push(event.source().selected_dates());
    });
    log
}

#[test]
fn drag_gesture_is_announced_once() {
    let mut model = SelectionModel::new();
    let log = recorder(&mut model);

    // Press on the 3rd, drag to the 6th, release.
    model.set_value_is_adjusting(true);
    model.clear_selection();
    model.add_selection_interval(date(2024, 5, 3), date(2024, 5, 4));
    model.clear_selection();
    model.add_selection_interval(date(2024, 5, 3), date(2024, 5, 6));
    assert!(log.borrow().is_empty());
    model.set_value_is_adjusting(false);

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(
        log[0],
        vec![
            date(2024, 5, 3),
            date(2024, 5, 4),
            date(2024, 5, 5),
            date(2024, 5, 6)
        ]
    );
    assert_eq!(model.lead_selection_date(), Some(date(2024, 5, 6)));
}

#[test]
fn ctrl_click_builds_disjoint_runs() {
    let mut model = SelectionModel::new();
    model.add_selection_interval(date(2024, 5, 1), date(2024, 5, 2));
    model.add_selection_interval(date(2024, 5, 10), date(2024, 5, 10));
    model.remove_selection_interval(date(2024, 5, 2), date(2024, 5, 2));

    assert_eq!(
        model.selected_dates(),
        vec![date(2024, 5, 1), date(2024, 5, 10)]
    );
    assert_eq!(model.selected_days_in_month(2024, 5), vec![1, 10]);
    assert_eq!(model.selected_date(), Some(date(2024, 5, 2)));
}

#[test]
fn switching_modes_starts_over() {
    let mut model = SelectionModel::new();
    model.add_selection_interval(date(2024, 1, 1), date(2024, 1, 31));
    let log = recorder(&mut model);

    model.set_selection_mode(SelectionMode::SingleInterval);
    assert!(model.is_selection_empty());
    assert!(log.borrow().is_empty());

    model.add_selection_interval(date(2024, 1, 8), date(2024, 1, 2));
    assert_eq!(model.selected_dates().len(), 7);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn mixed_value_kinds_feed_the_same_selection() {
    let mut model = SelectionModel::new();
    let noon = date(2024, 8, 2).at(datesel::Time {
        hour: 12,
        minute: 0,
        second: 0,
    });
    let outcome = model.set_selected_dates(vec![
        DateValue::from(date(2024, 8, 1)),
        DateValue::from(noon),
        DateValue::Timestamp(1_722_643_200),
        DateValue::from("04/08/2024"),
        DateValue::None,
    ]);

    assert_eq!(outcome.applied, 4);
    assert_eq!(outcome.skipped_indices(), vec![4]);
    assert_eq!(
        model.selected_dates(),
        vec![
            date(2024, 8, 1),
            date(2024, 8, 2),
            date(2024, 8, 3),
            date(2024, 8, 4)
        ]
    );
}

#[test]
fn configured_model_marks_its_month() {
    let config = SelectionConfig::from_yaml_str(
        "selection_mode: singleselection\ninitial_selection: ['2024-09-30']\n",
    )
    .expect("config");
    let model = SelectionModel::from_config(&config).expect("model");
    assert_eq!(model.selection_mode(), SelectionMode::Single);

    let marks = MonthGrid::new(2024, 9).selection_marks(&model);
    // The 30th is the Monday opening the sixth row.
    assert!(marks[5][0]);
    assert_eq!(marks.iter().flatten().filter(|&&m| m).count(), 1);
}
