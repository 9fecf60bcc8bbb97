pub mod alert_zone;
pub mod floating_label_inputs;
pub mod task_form;
pub mod tasks_list;
