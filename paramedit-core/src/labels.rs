//! User-facing strings shown by the editor.

pub const TITLE: &str = "Редактор параметров";
pub const ADD_NEW_LABEL: &str = "Добавить новый параметр";
pub const ADD_NEW_PLACEHOLDER: &str = "Введите имя нового параметра";
pub const ADD_BUTTON: &str = "Добавить параметр";
pub const DELETE_BUTTON: &str = "Удалить";
pub const GET_MODEL_BUTTON: &str = "Получить модель";
pub const OUTPUT_LABEL: &str = "Вывод модели:";
pub const FILL_ALL_PARAMS: &str = "Заполните все параметры";
