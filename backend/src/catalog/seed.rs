//! Demonstration offers inserted into empty catalogs

use super::model::{LoanCategory, LoanInput};

fn offer(
    name: &str,
    rate: &str,
    term: &str,
    amount: &str,
    advantage: &[&str],
    details: &str,
) -> LoanInput {
    LoanInput {
        name: name.to_string(),
        rate: rate.to_string(),
        term: term.to_string(),
        amount: amount.to_string(),
        advantage: advantage.iter().map(|s| s.to_string()).collect(),
        details: details.to_string(),
    }
}

/// Fixed demo set for `category`
pub fn demo_records(category: LoanCategory) -> Vec<LoanInput> {
    match category {
        LoanCategory::Consumer => vec![
            offer(
                "Кредит на любые цели",
                "от 11.9% годовых",
                "до 7 лет",
                "до 50 000 BYN",
                &["Без залога и поручителей", "Решение за 15 минут", "Досрочное погашение без комиссий"],
                "Потребительский кредит на любые нужды без подтверждения целевого использования. \
                 Оформление по паспорту, деньги зачисляются на карту в день обращения.",
            ),
            offer(
                "Кредит для зарплатных клиентов",
                "от 9.9% годовых",
                "до 5 лет",
                "до 40 000 BYN",
                &["Сниженная ставка", "Без справки о доходах", "Предодобренное решение"],
                "Специальные условия для клиентов, получающих заработную плату на карту АурумБанка. \
                 Ставка снижается автоматически, подтверждение дохода не требуется.",
            ),
            offer(
                "Рефинансирование кредитов",
                "от 10.5% годовых",
                "до 10 лет",
                "до 60 000 BYN",
                &["Объединение до 5 кредитов", "Снижение ежемесячного платежа", "Дополнительная сумма на личные цели"],
                "Перекредитование действующих займов других банков в одном кредите с единым платежом \
                 и более низкой ставкой.",
            ),
        ],
        LoanCategory::Mortgage => vec![
            offer(
                "Кредит на покупку жилья",
                "от 12.5% годовых",
                "до 20 лет",
                "до 200 000 BYN",
                &["Первоначальный взнос от 10%", "Отсрочка по основному долгу до 6 месяцев"],
                "Кредит на приобретение квартиры или дома на первичном и вторичном рынке. \
                 Залогом выступает приобретаемая недвижимость.",
            ),
            offer(
                "Кредит на строительство",
                "от 11.8% годовых",
                "до 25 лет",
                "до 180 000 BYN",
                &["Поэтапная выдача средств", "Проценты только на выданную сумму"],
                "Финансирование строительства или реконструкции жилья, в том числе в составе \
                 организованных групп застройщиков.",
            ),
            offer(
                "Кредит на ремонт жилья",
                "от 13.9% годовых",
                "до 10 лет",
                "до 70 000 BYN",
                &["Без залога до 30 000 BYN", "Можно оплатить материалы и работы"],
                "Кредит на капитальный и косметический ремонт, благоустройство и модернизацию жилья.",
            ),
        ],
        LoanCategory::Preferential => vec![
            offer(
                "Льготный кредит для многодетных семей",
                "от 4.5% годовых",
                "до 20 лет",
                "до 150 000 BYN",
                &["Государственная поддержка", "Частичное погашение за счёт субсидии"],
                "Льготное кредитование строительства и покупки жилья для семей, воспитывающих \
                 трёх и более несовершеннолетних детей.",
            ),
            offer(
                "Кредит для молодых семей",
                "от 6% годовых",
                "до 20 лет",
                "до 120 000 BYN",
                &["Сниженная ставка", "Отсрочка платежей при рождении ребёнка"],
                "Программа для семей, в которых оба супруга моложе 31 года, на приобретение или \
                 строительство первого жилья.",
            ),
            offer(
                "Кредит на энергосбережение",
                "от 5% годовых",
                "до 5 лет",
                "до 20 000 BYN",
                &["Без первоначального взноса", "Компенсация части процентов"],
                "Финансирование установки солнечных панелей, тепловых насосов и утепления фасадов \
                 частных домов.",
            ),
        ],
    }
}
