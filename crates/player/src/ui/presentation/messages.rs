//! User-facing toast texts

pub const ATTACK_NAME_REQUIRED: &str = "Введите название атаки";

pub const CAMPAIGNS_LOAD_FAILED: &str = "Не удалось загрузить кампании";
pub const CAMPAIGN_NAME_REQUIRED: &str = "Введите название кампании";
pub const CAMPAIGN_CREATED: &str = "Кампания создана";
pub const CAMPAIGN_CREATE_FAILED: &str = "Ошибка создания кампании";
pub const CAMPAIGN_INVITE_FAILED: &str = "Не удалось создать приглашение";

pub const CHARACTERS_LOAD_FAILED: &str = "Не удалось загрузить персонажей";
pub const CHARACTER_FIELDS_REQUIRED: &str = "Имя, КД и ИНИЦ обязательны";
pub const CHARACTER_CREATED: &str = "Персонаж добавлен";
pub const CHARACTER_CREATE_FAILED: &str = "Ошибка добавления персонажа";
pub const CHARACTER_INVALID: &str = "Некорректные данные";
pub const CHARACTER_UPDATED: &str = "Персонаж обновлён";
pub const CHARACTER_UPDATE_FAILED: &str = "Ошибка обновления персонажа";
pub const CHARACTER_DELETE_CONFIRM: &str = "Удалить персонажа?";
pub const CHARACTER_DELETED: &str = "Персонаж удалён";
pub const CHARACTER_DELETE_FAILED: &str = "Ошибка удаления персонажа";

pub const SELECT_CAMPAIGN_FIRST: &str = "Сначала выберите кампанию";
pub const SETUP_PLAYERS_LOAD_FAILED: &str = "Не удалось загрузить персонажей для схватки";
pub const UNIQUE_FIELDS_REQUIRED: &str = "Заполни имя, ХП, КД и ИНИЦ+";
pub const GROUP_FIELDS_REQUIRED: &str = "Заполни имя, xN, ХП, КД и ИНИЦ+";
pub const NO_CAMPAIGN_SELECTED: &str = "Нет выбранной кампании";
pub const NO_PLAYERS_SELECTED: &str = "Выбери хотя бы одного игрока";
pub const ENCOUNTER_STARTED: &str = "Схватка началась";
pub const ENCOUNTER_START_FAILED: &str = "Ошибка при запуске схватки";
pub const ENCOUNTER_NAME_PLACEHOLDER: &str = "Засада у моста";

pub const TRACKER_LOAD_FAILED: &str = "Ошибка загрузки схватки";
pub const TRACKER_NEXT_TURN_FAILED: &str = "Ошибка перехода хода";
pub const TRACKER_HP_FAILED: &str = "Ошибка изменения ХП";
pub const TRACKER_HP_INVALID: &str = "Введите число";
pub const TRACKER_FINISH_FAILED: &str = "Ошибка завершения схватки";
pub const TRACKER_FINISHED: &str = "Схватка завершена";

pub const REFERENCE_SEARCH_FAILED: &str = "Ошибка поиска";
pub const REFERENCE_LOAD_FAILED: &str = "Ошибка загрузки данных";
pub const REFERENCE_EMPTY: &str = "Данные не найдены";
pub const REFERENCE_DETAIL_FAILED: &str = "Ошибка загрузки";

pub fn unique_added(name: &str, attacks: usize) -> String {
    if attacks > 0 {
        format!("Моб '{name}' добавлен с {attacks} атаками ⚔️")
    } else {
        format!("Моб '{name}' добавлен")
    }
}

pub fn group_added(name: &str, count: u32, attacks: usize) -> String {
    if attacks > 0 {
        format!("Группа '{name}' (x{count}) добавлена с {attacks} атаками ⚔️")
    } else {
        format!("Группа '{name}' (x{count}) добавлена")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monster_toasts_mention_attacks_only_when_present() {
        assert_eq!(unique_added("Огр", 0), "Моб 'Огр' добавлен");
        assert_eq!(unique_added("Огр", 2), "Моб 'Огр' добавлен с 2 атаками ⚔️");
        assert_eq!(group_added("Гоблин", 4, 0), "Группа 'Гоблин' (x4) добавлена");
        assert_eq!(
            group_added("Гоблин", 4, 1),
            "Группа 'Гоблин' (x4) добавлена с 1 атаками ⚔️"
        );
    }
}
