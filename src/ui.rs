use eframe::{App, Frame, CreationContext, egui};
use egui::{Ui, ScrollArea, RichText, Color32, Layout, Align};
use egui_extras::DatePickerButton;
use tracing::warn;

use crate::api::Transport;
use crate::editor::SetField;
use crate::error::Fault;
use crate::history::summarize_item;
use crate::state::{AppState, Tab};
use crate::store::RefreshReport;

/// Clicks gathered while drawing, applied once the frame's borrows end.
enum Action {
    Refresh,
    AddExercise,
    AddWorkoutItem,
    RemoveWorkoutItem(usize),
    CreateWorkout,
    UseTemplate(usize),
    AddSet(usize),
    UpdateSet(usize, usize, SetField),
    LogSession,
    FilterHistory,
}

pub struct TrackerApp<T> {
    state: AppState<T>,
    backend_url: String,
    status: Option<String>,
}

impl<T: Transport> TrackerApp<T> {
    pub fn new(_cc: &CreationContext, state: AppState<T>, backend_url: String) -> Self {
        let mut app = TrackerApp {
            state,
            backend_url,
            status: None,
        };
        app.apply(Action::Refresh);
        app
    }

    fn apply(&mut self, action: Action) {
        let result = match action {
            Action::Refresh => Ok(Some(self.state.refresh_all())),
            Action::AddExercise => self.state.add_exercise().map(|saved| Some(saved.refresh)),
            Action::AddWorkoutItem => {
                self.state.add_workout_item();
                Ok(None)
            }
            Action::RemoveWorkoutItem(idx) => {
                self.state.remove_workout_item(idx);
                Ok(None)
            }
            Action::CreateWorkout => self.state.create_workout().map(|saved| Some(saved.refresh)),
            Action::UseTemplate(idx) => {
                self.state.use_template(idx);
                Ok(None)
            }
            Action::AddSet(i) => {
                self.state.add_performed_set(i);
                Ok(None)
            }
            Action::UpdateSet(i, j, field) => {
                self.state.update_performed_set(i, j, field);
                Ok(None)
            }
            Action::LogSession => self.state.log_session().map(|saved| Some(saved.refresh)),
            Action::FilterHistory => self
                .state
                .filter_history()
                .map(|()| Some(RefreshReport::default())),
        };
        match result {
            Ok(Some(report)) => self.show_refresh(&report),
            Ok(None) => {}
            Err(fault) => self.report(fault),
        }
    }

    fn show_refresh(&mut self, report: &RefreshReport) {
        self.status = report.summary();
    }

    fn report(&mut self, fault: Fault) {
        if fault.is_validation() {
            return;
        }
        warn!(error = %fault, "request failed");
        self.status = Some(fault.to_string());
    }
}

impl<T: Transport> App for TrackerApp<T> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("FitTrack").heading().strong());
                    ui.add_space(20.0);
                    for tab in Tab::ALL {
                        if ui.selectable_label(self.state.tab == tab, tab.label()).clicked() {
                            self.state.tab = tab;
                        }
                    }
                });
                ui.separator();

                match self.state.tab {
                    Tab::Library => self.show_library(ui, &mut actions),
                    Tab::Plan => self.show_planner(ui, &mut actions),
                    Tab::Log => self.show_log(ui, &mut actions),
                    Tab::History => self.show_history(ui, &mut actions),
                }

                ui.add_space(10.0);
                ui.separator();
                if let Some(status) = &self.status {
                    ui.label(RichText::new(status).color(Color32::RED));
                }
                ui.label(RichText::new(format!("Backend: {}", self.backend_url)).small());
            });
        });

        for action in actions {
            self.apply(action);
        }
    }
}

impl<T: Transport> TrackerApp<T> {
    fn show_library(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Exercise Library").heading());
            if ui.button("Refresh").clicked() {
                actions.push(Action::Refresh);
            }
        });

        ui.columns(2, |cols| {
            let form = &mut self.state.exercise_form;
            cols[0].label("Name");
            cols[0].add(egui::TextEdit::singleline(&mut form.name).hint_text("Bench Press"));
            cols[0].label("Muscle Group");
            cols[0].add(egui::TextEdit::singleline(&mut form.muscle_group).hint_text("Chest"));
            cols[0].label("Equipment");
            cols[0].add(egui::TextEdit::singleline(&mut form.equipment).hint_text("Barbell"));
            cols[0].label("Notes");
            cols[0].add(egui::TextEdit::multiline(&mut form.notes).desired_rows(3));
            if cols[0].button("Add Exercise").clicked() {
                actions.push(Action::AddExercise);
            }

            cols[1].label(RichText::new("Saved Exercises").strong());
            ScrollArea::vertical().id_salt("exercises").max_height(320.0).show(&mut cols[1], |ui| {
                if self.state.stores.exercises.is_empty() {
                    ui.label("No exercises yet.");
                }
                for exercise in &self.state.stores.exercises {
                    ui.label(RichText::new(&exercise.name).strong());
                    let caption = exercise.caption();
                    if !caption.is_empty() {
                        ui.label(RichText::new(caption).small());
                    }
                    ui.add_space(4.0);
                }
            });
        });
    }

    fn show_planner(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Workout Planner").heading());
            if ui.button("Refresh").clicked() {
                actions.push(Action::Refresh);
            }
        });

        ui.columns(2, |cols| {
            let composer = &mut self.state.composer;
            cols[0].label("Title");
            cols[0].add(egui::TextEdit::singleline(&mut composer.title).hint_text("Push Day"));
            cols[0].label("Description");
            cols[0].add(egui::TextEdit::multiline(&mut composer.description).desired_rows(2));

            cols[0].group(|ui| {
                ui.label(RichText::new("Add Exercise").strong());
                ui.add(egui::TextEdit::singleline(&mut composer.pending_name).hint_text("Exercise name"));
                ui.horizontal(|ui| {
                    ui.label("Sets");
                    ui.add(egui::DragValue::new(&mut composer.pending_sets).range(1..=20));
                    ui.label("Reps");
                    ui.add(egui::DragValue::new(&mut composer.pending_reps).range(1..=100));
                    ui.label("Rest (s)");
                    ui.add(egui::DragValue::new(&mut composer.pending_rest).range(0..=600));
                });
                if ui.button("Add to List").clicked() {
                    actions.push(Action::AddWorkoutItem);
                }
            });

            if composer.items.is_empty() {
                cols[0].label("No exercises added yet.");
            }
            for (idx, item) in composer.items.iter().enumerate() {
                cols[0].horizontal(|ui| {
                    ui.label(RichText::new(&item.exercise_name).strong());
                    ui.label(format!("{} x {} • Rest {}s", item.sets, item.reps, item.rest_seconds));
                    if ui.small_button("Remove").clicked() {
                        actions.push(Action::RemoveWorkoutItem(idx));
                    }
                });
            }
            if cols[0].button("Save Workout").clicked() {
                actions.push(Action::CreateWorkout);
            }

            cols[1].label(RichText::new("Saved Workouts").strong());
            ScrollArea::vertical().id_salt("workouts").max_height(420.0).show(&mut cols[1], |ui| {
                if self.state.stores.templates.is_empty() {
                    ui.label("No workouts yet.");
                }
                for (idx, workout) in self.state.stores.templates.iter().enumerate() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&workout.title).strong());
                            if ui.button("Use").clicked() {
                                actions.push(Action::UseTemplate(idx));
                            }
                        });
                        if let Some(description) = &workout.description {
                            ui.label(RichText::new(description).small());
                        }
                        for item in &workout.items {
                            ui.label(format!("• {} — {}x{}", item.exercise_name, item.sets, item.reps));
                        }
                    });
                }
            });
        });
    }

    fn show_log(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.label(RichText::new("Log Workout Session").heading());

        ui.columns(2, |cols| {
            let draft = &mut self.state.draft;
            cols[0].label("Date");
            cols[0].add(DatePickerButton::new(&mut draft.date_str).id_salt("log-date"));
            cols[0].label("Workout Title");
            cols[0].add(egui::TextEdit::singleline(&mut draft.workout_title).hint_text("Push Day"));
            cols[0].label("Notes");
            cols[0].add(egui::TextEdit::multiline(&mut draft.notes).desired_rows(3));

            cols[1].label("Exercises");
            ScrollArea::vertical().id_salt("session-items").max_height(420.0).show(&mut cols[1], |ui| {
                if draft.items.is_empty() {
                    ui.label("Load a template from Planner or add exercises there first.");
                }
                for (i, item) in draft.items.iter().enumerate() {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&item.exercise_name).strong());
                            if ui.small_button("Add Set").clicked() {
                                actions.push(Action::AddSet(i));
                            }
                        });
                        ui.label(
                            RichText::new(format!("Target: {} x {}", item.target_sets, item.target_reps))
                                .small(),
                        );
                        for (j, set) in item.performed_sets.iter().enumerate() {
                            ui.horizontal(|ui| {
                                ui.label(format!("#{}", set.set_number));

                                let mut weight = set.weight;
                                if ui.add(egui::DragValue::new(&mut weight).speed(0.5).range(0.0..=1000.0).prefix("kg ")).changed() {
                                    actions.push(Action::UpdateSet(i, j, SetField::Weight(weight)));
                                }

                                let mut reps = set.reps;
                                if ui.add(egui::DragValue::new(&mut reps).range(1..=100).suffix(" reps")).changed() {
                                    actions.push(Action::UpdateSet(i, j, SetField::Reps(reps)));
                                }

                                let mut rpe = set.rpe.unwrap_or(0.0);
                                if ui.add(egui::DragValue::new(&mut rpe).speed(0.5).range(0.0..=10.0).prefix("RPE ")).changed() {
                                    let rpe = (rpe >= 1.0).then_some(rpe);
                                    actions.push(Action::UpdateSet(i, j, SetField::Rpe(rpe)));
                                }
                            });
                        }
                    });
                }
            });
            if cols[1].button("Save Session").clicked() {
                actions.push(Action::LogSession);
            }
        });
    }

    fn show_history(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Workout History").heading());
            ui.add(DatePickerButton::new(&mut self.state.history_date).id_salt("history-date"));
            if ui.button("Filter").clicked() {
                actions.push(Action::FilterHistory);
            }
            if ui.button("Refresh").clicked() {
                actions.push(Action::Refresh);
            }
        });

        ScrollArea::vertical().id_salt("history").show(ui, |ui| {
            ui.set_width(ui.available_width());
            if self.state.stores.sessions.is_empty() {
                ui.label("No sessions logged yet.");
            }
            for session in &self.state.stores.sessions {
                ui.group(|ui| {
                    ui.label(RichText::new(&session.workout_title).strong());
                    ui.label(RichText::new(session.date_str.to_string()).small());
                    for item in &session.items {
                        ui.label(format!("• {}", summarize_item(item)));
                    }
                    if let Some(notes) = &session.notes {
                        ui.label(RichText::new(notes).italics());
                    }
                });
                ui.add_space(6.0);
            }
        });
    }
}
