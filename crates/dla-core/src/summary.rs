//! Per-category totals for a parsed day.

use chrono::TimeDelta;
use serde::Serialize;

use crate::Task;
use crate::day::serialize_secs;

/// Accumulated time for one task name within a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSummary {
    pub name: String,
    #[serde(rename = "duration_secs", serialize_with = "serialize_secs")]
    pub duration: TimeDelta,
}

/// Accumulated time for one category, with its tasks in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    #[serde(rename = "total_secs", serialize_with = "serialize_secs")]
    pub total_duration: TimeDelta,
    pub tasks: Vec<TaskSummary>,
}

impl CategorySummary {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            total_duration: TimeDelta::zero(),
            tasks: Vec::new(),
        }
    }

    fn add(&mut self, name: &str, duration: TimeDelta) {
        match self.tasks.iter_mut().find(|t| t.name == name) {
            Some(task) => task.duration += duration,
            None => self.tasks.push(TaskSummary {
                name: name.to_string(),
                duration,
            }),
        }
        self.total_duration += duration;
    }
}

/// Groups tasks by category and name, summing their durations.
///
/// Zero-length tasks are dropped. Categories and task names keep the order in which
/// they first appear in `tasks`.
pub fn summarize(tasks: &[Task]) -> Vec<CategorySummary> {
    let mut categories: Vec<CategorySummary> = Vec::new();

    for task in tasks.iter().filter(|t| t.duration() != TimeDelta::zero()) {
        let index = match categories.iter().position(|c| c.name == task.category()) {
            Some(index) => index,
            None => {
                categories.push(CategorySummary::new(task.category()));
                categories.len() - 1
            }
        };
        categories[index].add(task.name(), task.duration());
    }

    categories
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new("Work", "Email", at(9, 0), at(10, 30)),
            Task::new("Work", "Meeting", at(10, 30), at(11, 0)),
            Task::new("Break", "Coffee", at(11, 0), at(11, 15)),
            Task::new("Work", "Email", at(11, 15), at(11, 45)),
        ]
    }

    #[test]
    fn test_groups_by_category_then_name() {
        let summary = summarize(&sample_tasks());

        assert_eq!(
            summary,
            vec![
                CategorySummary {
                    name: "Work".to_string(),
                    total_duration: TimeDelta::minutes(150),
                    tasks: vec![
                        TaskSummary {
                            name: "Email".to_string(),
                            duration: TimeDelta::minutes(120),
                        },
                        TaskSummary {
                            name: "Meeting".to_string(),
                            duration: TimeDelta::minutes(30),
                        },
                    ],
                },
                CategorySummary {
                    name: "Break".to_string(),
                    total_duration: TimeDelta::minutes(15),
                    tasks: vec![TaskSummary {
                        name: "Coffee".to_string(),
                        duration: TimeDelta::minutes(15),
                    }],
                },
            ]
        );
    }

    #[test]
    fn test_category_total_is_sum_of_tasks() {
        for category in summarize(&sample_tasks()) {
            let sum = category
                .tasks
                .iter()
                .fold(TimeDelta::zero(), |acc, t| acc + t.duration);
            assert_eq!(sum, category.total_duration, "category {}", category.name);
        }
    }

    #[test]
    fn test_zero_duration_tasks_are_dropped() {
        let tasks = vec![
            Task::new("Work", "Email", at(9, 0), at(9, 0)),
            Task::new("Idle", "Nothing", at(9, 0), at(9, 0)),
            Task::new("Work", "Call", at(9, 0), at(9, 20)),
        ];
        let summary = summarize(&tasks);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].name, "Work");
        assert_eq!(summary[0].tasks.len(), 1);
        assert_eq!(summary[0].tasks[0].name, "Call");
    }

    #[test]
    fn test_names_are_matched_exactly() {
        let tasks = vec![
            Task::new("Work", "email", at(9, 0), at(9, 10)),
            Task::new("work", "Email", at(9, 10), at(9, 20)),
        ];
        let summary = summarize(&tasks);

        assert_eq!(summary.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(summarize(&[]).is_empty());
    }
}
