//! Static page copy.
//!
//! Every presentation section renders from one of these tables.

use crate::types::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub icon: &'static str,
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// One corridor card in the "our routes" block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouteCard {
    pub route: Route,
    pub flag: &'static str,
    pub title: &'static str,
    pub cities: &'static str,
    pub highlights: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Shipping mode with its transit time and starting price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShippingType {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub time: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub avatar: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub route: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { icon: "📦", number: "350+", label: "Успешных доставок" },
    Stat { icon: "😊", number: "95%", label: "Довольных клиентов" },
    Stat { icon: "🏆", number: "5+", label: "Лет на рынке" },
    Stat { icon: "🎧", number: "24/7", label: "Поддержка клиентов" },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🌍",
        title: "Международные маршруты",
        description: "ОАЭ → РФ и Турция → РФ с оптимальными сроками доставки",
    },
    Feature {
        icon: "🛡️",
        title: "Полное сопровождение",
        description: "Оформление документов, таможенное декларирование, доставка до двери",
    },
    Feature {
        icon: "⏱️",
        title: "Быстрые сроки",
        description: "Авиа и морские перевозки с гарантированными сроками доставки",
    },
    Feature {
        icon: "💳",
        title: "Прозрачное ценообразование",
        description: "Расчет стоимости с учетом всех расходов, никаких скрытых платежей",
    },
    Feature {
        icon: "📍",
        title: "Отслеживание груза",
        description: "Онлайн мониторинг местоположения вашего груза в реальном времени",
    },
    Feature {
        icon: "🤝",
        title: "Персональный менеджер",
        description: "Индивидуальный подход и консультации на всех этапах",
    },
];

pub const ROUTE_CARDS: &[RouteCard] = &[
    RouteCard {
        route: Route::UaeToRf,
        flag: "🇦🇪",
        title: "ОАЭ → Россия",
        cities: "Дубай, Абу-Даби, Шарджа и другие эмираты",
        highlights: &["Авиа доставка 5-7 дней", "Морская доставка 25-35 дней", "Любые типы грузов"],
    },
    RouteCard {
        route: Route::TurkeyToRf,
        flag: "🇹🇷",
        title: "Турция → Россия",
        cities: "Стамбул, Анкара, Измир и другие города",
        highlights: &["Авиа доставка 3-5 дней", "Авто доставка 7-10 дней", "Консолидация грузов"],
    },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        icon: "📝",
        title: "Оставьте заявку",
        description: "Заполните форму или свяжитесь с нами любым удобным способом",
    },
    Step {
        number: "02",
        icon: "💰",
        title: "Расчет стоимости",
        description: "Получите точный расчет стоимости доставки",
    },
    Step {
        number: "03",
        icon: "📋",
        title: "Оформление документов",
        description: "Берем на себя всю работу с таможней и документацией",
    },
    Step {
        number: "04",
        icon: "🚚",
        title: "Отправка груза",
        description: "Забираем груз из точки отправления и начинаем доставку",
    },
    Step {
        number: "05",
        icon: "✅",
        title: "Получение груза",
        description: "Доставляем груз по указанному адресу точно в срок",
    },
];

pub const SHIPPING_TYPES: &[ShippingType] = &[
    ShippingType {
        id: "air",
        icon: "✈️",
        title: "Авиа доставка",
        time: "3-7 дней",
        price: "от $15/кг",
        features: &[
            "Самый быстрый способ",
            "Подходит для срочных грузов",
            "Доставка в любую точку мира",
            "Страховка груза",
            "Отслеживание в реальном времени",
        ],
    },
    ShippingType {
        id: "sea",
        icon: "🚢",
        title: "Морская доставка",
        time: "25-45 дней",
        price: "от $2/кг",
        features: &[
            "Экономичный вариант",
            "Большие объемы грузов",
            "Контейнерные перевозки",
            "FCL и LCL варианты",
            "Оптимально для негабарита",
        ],
    },
    ShippingType {
        id: "ground",
        icon: "🚚",
        title: "Авто доставка",
        time: "7-14 дней",
        price: "от $5/кг",
        features: &[
            "Оптимальная скорость",
            "Доставка до двери",
            "Подходит для Турции",
            "Гибкие маршруты",
            "Доступные цены",
        ],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        avatar: "👨‍💼",
        name: "Алексей Петров",
        role: "Директор по закупкам",
        company: "ООО \"ТехноИмпорт\"",
        route: "ОАЭ → Москва",
        text: "Работаем уже 3 года. Всегда четкие сроки, прозрачное ценообразование и отличная поддержка. Доставили сложный груз из Дубая за 5 дней - это рекорд!",
    },
    Testimonial {
        avatar: "👩‍💼",
        name: "Марина Соколова",
        role: "Владелец",
        company: "Интернет-магазин \"Восток\"",
        route: "Турция → Санкт-Петербург",
        text: "Отличный сервис! Помогли с таможенным оформлением, взяли на себя все хлопоты. Груз пришел в целости и сохранности. Рекомендую всем!",
    },
    Testimonial {
        avatar: "👨‍💻",
        name: "Дмитрий Иванов",
        role: "Предприниматель",
        company: "ИП Иванов",
        route: "Турция → Екатеринбург",
        text: "Первый раз заказывал доставку из Стамбула. Менеджер все подробно объяснил, помог с документами. Груз пришел даже раньше срока. Цены адекватные.",
    },
    Testimonial {
        avatar: "👩",
        name: "Елена Смирнова",
        role: "Менеджер по логистике",
        company: "Торговый дом \"Азия\"",
        route: "ОАЭ → Новосибирск",
        text: "Профессиональный подход на всех этапах. Особенно понравилась возможность отслеживания груза онлайн. Всегда в курсе где находится товар.",
    },
];

pub const CTA_BENEFITS: &[(&str, &str)] = &[
    ("🚀", "Быстрая обработка заявок"),
    ("💰", "Лучшие цены на рынке"),
    ("🛡️", "Гарантия безопасности"),
    ("🎁", "Скидки постоянным клиентам"),
];

pub const FAQ: &[FaqItem] = &[
    FaqItem {
        question: "Сколько стоит доставка?",
        answer: "Стоимость зависит от веса, объема, типа груза и способа доставки. Оставьте заявку, и менеджер пришлет точный расчет без скрытых платежей.",
    },
    FaqItem {
        question: "Какие сроки доставки?",
        answer: "Авиа из ОАЭ занимает 5-7 дней, из Турции 3-5 дней. Авто из Турции 7-10 дней, море 25-45 дней.",
    },
    FaqItem {
        question: "Вы занимаетесь таможенным оформлением?",
        answer: "Да. Мы готовим документы, проводим декларирование и берем на себя общение с таможней.",
    },
    FaqItem {
        question: "Можно ли отследить груз?",
        answer: "Да, на каждом этапе вы получаете статус груза, а менеджер всегда на связи.",
    },
    FaqItem {
        question: "Есть ли минимальный объем груза?",
        answer: "Нет. Небольшие партии мы консолидируем с другими грузами, чтобы снизить стоимость.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_has_a_card() {
        for route in Route::ALL {
            assert_eq!(ROUTE_CARDS.iter().filter(|c| c.route == route).count(), 1);
        }
    }

    #[test]
    fn test_steps_are_numbered_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn test_shipping_type_ids_unique() {
        let mut ids: Vec<_> = SHIPPING_TYPES.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SHIPPING_TYPES.len());
    }
}
