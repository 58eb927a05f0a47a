/// A business-purpose category and the lower-case stems that select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
}

pub const OTHER_TAG: &str = "other";

/// Built-in purpose dictionary. Declaration order is match priority: the
/// first entry with a keyword contained in the normalized narration wins.
pub const TAG_DICTIONARY: &[TagEntry] = &[
    // Bank commissions. Specific fees precede the generic `bank_fee`, and
    // all of them precede the income tags that share their keywords.
    TagEntry {
        tag: "acquiring_fee",
        keywords: &[
            "комиссия за эквайринг", "комиссия по эквайринг", "комиссия банка за эквайринг",
            "комиссия за торговый эквайринг", "комиссия за интернет-эквайринг",
            "комиссия за операции по терминал", "комиссия за операции с использованием карт",
            "комиссия за прием карт", "комиссия за приём карт",
        ],
    },
    TagEntry {
        tag: "sbp_fee",
        keywords: &[
            "комиссия за сбп", "комиссия сбп", "комиссия за перевод по сбп",
            "комиссия за операции сбп", "комиссия за оплату по qr",
        ],
    },
    TagEntry {
        tag: "cash_withdrawal_fee",
        keywords: &[
            "комиссия за снятие", "комиссия за выдачу наличн", "плата за снятие наличн",
        ],
    },
    TagEntry {
        tag: "account_maintenance_fee",
        keywords: &[
            "плата за обслуживание", "комиссия за обслуживание", "комиссия за ведение",
            "плата за ведение", "ведение счет", "ведение счёт", "абонентская плата за пакет",
            "пакет услуг", "тарифный план",
        ],
    },
    TagEntry {
        tag: "payment_order_fee",
        keywords: &[
            "комиссия за платеж", "комиссия за платёж", "комиссия за перевод",
            "комиссия за исполнение", "комиссия за проведение", "плата за перевод",
        ],
    },
    TagEntry {
        tag: "marketplace_fee",
        keywords: &[
            "комиссия маркетплейс", "вознаграждение маркетплейс", "комиссия вайлдберриз",
            "комиссия ozon", "комиссия озон",
        ],
    },
    TagEntry {
        tag: "agent_commission",
        keywords: &[
            "агентское вознагражд", "агентского вознагражд", "комиссионное вознагражд",
            "комиссионного вознагражд", "вознаграждение агент", "вознаграждение комиссионер",
        ],
    },
    TagEntry {
        tag: "bank_fee",
        keywords: &[
            "комисси", "банковская плата", "плата за смс", "смс-информир", "sms-информир",
            "плата за sms",
        ],
    },
    // Card, SBP and marketplace settlements.
    TagEntry {
        tag: "acquiring_income",
        keywords: &[
            "эквайринг", "зачисление по терминал", "зачисление средств по терминал",
            "операции по терминал", "операциям по терминал", "возмещение по операциям с карт",
            "расчеты по картам", "расчетам по картам", "торговая выручка по карт",
        ],
    },
    TagEntry {
        tag: "sbp_income",
        keywords: &[
            "сбп", "системы быстрых платежей", "система быстрых платежей", "по qr", "qr-код",
        ],
    },
    TagEntry {
        tag: "marketplace_income",
        keywords: &[
            "вайлдберриз", "wildberries", "озон", "ozon", "яндекс маркет", "яндекс.маркет",
            "мегамаркет", "маркетплейс",
        ],
    },
    // Taxes and mandatory payments.
    TagEntry {
        tag: "tax_refund",
        keywords: &[
            "возврат налог", "возврат излишне уплаченн", "возврат излишне взысканн",
            "возмещение налог",
        ],
    },
    TagEntry { tag: "tax_ndfl", keywords: &["ндфл", "налог на доходы физических"] },
    TagEntry { tag: "tax_vat", keywords: &["налог на добавленную"] },
    TagEntry { tag: "tax_profit", keywords: &["налог на прибыль"] },
    TagEntry {
        tag: "tax_usn",
        keywords: &[
            "упрощенн", "упрощённ", "налог усн", "налог по усн", "налога по усн", "усн за",
            "единый налог в связи",
        ],
    },
    TagEntry { tag: "tax_property", keywords: &["налог на имущество"] },
    TagEntry { tag: "tax_transport", keywords: &["транспортный налог", "транспортного налога"] },
    TagEntry { tag: "tax_land", keywords: &["земельный налог", "земельного налога"] },
    TagEntry { tag: "tax_patent", keywords: &["патент"] },
    TagEntry {
        tag: "tax_single_payment",
        keywords: &[
            "енп", "единый налоговый платеж", "единый налоговый платёж", "единого налогового",
        ],
    },
    TagEntry {
        tag: "insurance_contributions",
        keywords: &[
            "страховые взносы", "страховых взносов", "взносы на обязательное",
            "взносов на обязательное", "обязательное пенсионное", "обязательное медицинское",
            "обязательное социальное", "пенсионное страхование", "пфр", "фсс", "фомс",
        ],
    },
    TagEntry {
        tag: "fines_penalties",
        keywords: &[
            "штраф", "пени по", "пени за", "пеня", "пеней",
        ],
    },
    TagEntry {
        tag: "court_fees",
        keywords: &[
            "судебн", "арбитражн", "исполнительский сбор", "госпошлина за рассмотрение",
            "госпошлины за рассмотрение",
        ],
    },
    TagEntry {
        tag: "state_registration",
        keywords: &[
            "госрегистрац", "государственная регистрац", "государственную регистрац", "егрюл",
            "егрип", "росреестр",
        ],
    },
    TagEntry {
        tag: "tax_other",
        keywords: &[
            "налог", "госпошлин", "государственная пошлин", "государственной пошлин", "сбор за",
        ],
    },
    // Payroll and people.
    TagEntry {
        tag: "alimony",
        keywords: &[
            "алимент", "исполнительному листу", "исполнительного листа", "исполнительный лист",
        ],
    },
    TagEntry { tag: "sick_leave", keywords: &["больничн", "нетрудоспособн"] },
    TagEntry {
        tag: "material_aid",
        keywords: &[
            "материальная помощь", "материальной помощи", "материальную помощь",
        ],
    },
    TagEntry {
        tag: "salary",
        keywords: &[
            "заработн", "зарплат", "оклад", "з/п", "премия сотрудник", "премии сотрудник",
            "отпускн", "при увольнении",
        ],
    },
    TagEntry {
        tag: "business_trip",
        keywords: &[
            "командировоч", "командировк", "суточные", "суточных",
        ],
    },
    TagEntry {
        tag: "employee_reimbursement",
        keywords: &[
            "подотчет", "подотчёт", "под отчет", "под отчёт", "авансовому отчету",
            "авансовый отчет",
        ],
    },
    // Owners, financing and cash.
    TagEntry { tag: "dividends", keywords: &["дивиденд"] },
    TagEntry {
        tag: "founder_contribution",
        keywords: &[
            "уставный капитал", "уставного капитала", "вклад в имущество",
            "финансовая помощь учредител", "займ учредител", "заем учредител", "взнос учредител",
        ],
    },
    TagEntry {
        tag: "owner_withdrawal",
        keywords: &[
            "личные нужды", "собственные нужды", "вывод прибыли", "на личную карту",
        ],
    },
    TagEntry {
        tag: "deposit_interest",
        keywords: &[
            "проценты на остаток", "процентов на остаток", "начисленные проценты",
            "капитализация процентов", "проценты по депозит", "процентов по депозит",
        ],
    },
    TagEntry {
        tag: "deposit",
        keywords: &[
            "депозит", "неснижаемый остаток", "неснижаемого остатка",
        ],
    },
    TagEntry {
        tag: "loan_interest",
        keywords: &[
            "проценты по кредит", "процентов по кредит", "проценты за пользование",
            "процентов за пользование", "уплата процентов", "проценты по займ", "процентов по займ",
            "проценты по договору займ",
        ],
    },
    TagEntry {
        tag: "loan_repayment",
        keywords: &[
            "погашение кредит", "погашение основного долга", "погашение ссуд", "погашение займ",
            "возврат займ", "возврат кредит", "гашение кредит",
        ],
    },
    TagEntry {
        tag: "loan_received",
        keywords: &[
            "выдача кредит", "предоставление кредит", "зачисление кредит", "выдача займ",
            "предоставление займ", "договору займ", "кредитные средства", "транш",
        ],
    },
    TagEntry { tag: "leasing", keywords: &["лизинг"] },
    TagEntry {
        tag: "securities",
        keywords: &[
            "ценных бумаг", "облигац", "покупка акций", "продажа акций", "брокерск", "инвестиц",
        ],
    },
    TagEntry {
        tag: "currency_exchange",
        keywords: &[
            "конвертац", "продажа валют", "покупка валют", "продажи валют", "покупки валют",
            "обмен валют", "курсовая разниц",
        ],
    },
    TagEntry {
        tag: "own_funds_transfer",
        keywords: &[
            "перевод собственных средств", "собственных средств", "перевод средств между счетами",
            "между своими счетами", "перевод на свой счет", "перевод на свой счёт",
        ],
    },
    TagEntry { tag: "cash_collection", keywords: &["инкассац"] },
    TagEntry {
        tag: "cash_deposit",
        keywords: &[
            "взнос наличн", "внесение наличн", "взнос собственных",
        ],
    },
    TagEntry {
        tag: "cash_withdrawal",
        keywords: &[
            "снятие наличн", "выдача наличн", "получение наличн",
        ],
    },
    TagEntry {
        tag: "insurance_payout",
        keywords: &[
            "страховое возмещение", "страховая выплата", "страховой выплаты",
            "страхового возмещения",
        ],
    },
    TagEntry {
        tag: "insurance_premium",
        keywords: &[
            "страховая премия", "страховой премии", "страхован", "полис", "осаго", "каско", "дмс",
        ],
    },
    TagEntry { tag: "chargeback", keywords: &["чарджбэк", "chargeback", "опротестован"] },
    TagEntry {
        tag: "refund",
        keywords: &[
            "возврат излишне", "возврат ошибочно", "возврат денежных средств", "возврат средств",
            "возврат оплаты", "возврат аванс", "возврат предоплат", "возврат переплат",
            "возврат товар",
        ],
    },
    TagEntry { tag: "cashback", keywords: &["кэшбэк", "кешбэк", "cashback", "бонус"] },
    TagEntry { tag: "subsidies", keywords: &["субсиди", "грант", "господдержк"] },
    // Premises, utilities and upkeep.
    TagEntry {
        tag: "rent_office",
        keywords: &[
            "аренда офис", "аренду офис", "аренды офис", "офисного помещения", "офисных помещений",
            "офисное помещение", "аренда нежилого", "аренду нежилого", "аренды нежилого",
        ],
    },
    TagEntry {
        tag: "rent_warehouse",
        keywords: &[
            "аренда склад", "аренду склад", "аренды склад", "складского помещения",
            "складских помещений", "ответственное хранение", "хранение товар",
        ],
    },
    TagEntry {
        tag: "rent_equipment",
        keywords: &[
            "аренда оборудован", "аренду оборудован", "аренды оборудован", "аренда техники",
            "аренду техники", "аренда спецтехник", "аренду спецтехник",
        ],
    },
    TagEntry {
        tag: "rent_vehicle",
        keywords: &[
            "аренда автомоб", "аренду автомоб", "аренды автомоб", "аренда транспорт",
            "аренду транспорт", "аренды транспорт",
        ],
    },
    TagEntry {
        tag: "rent_land",
        keywords: &[
            "аренда земел", "аренду земел", "аренды земел", "земельного участка",
        ],
    },
    TagEntry { tag: "rent_other", keywords: &["аренд", "найм помещени", "наем помещени"] },
    TagEntry {
        tag: "utilities_electricity",
        keywords: &[
            "электроэнерги", "электроснабжен", "электрической энергии",
        ],
    },
    TagEntry {
        tag: "utilities_heating",
        keywords: &[
            "теплоснабжен", "тепловая энергия", "тепловую энергию", "тепловой энергии", "отоплени",
        ],
    },
    TagEntry {
        tag: "utilities_water",
        keywords: &[
            "водоснабжен", "водоотведен", "холодная вода", "горячая вода", "водопотреблен",
        ],
    },
    TagEntry {
        tag: "utilities_gas",
        keywords: &[
            "газоснабжен", "поставка газа", "поставку газа", "природный газ",
        ],
    },
    TagEntry {
        tag: "waste_disposal",
        keywords: &[
            "вывоз мусора", "вывоз тко", "обращение с тко", "обращению с тко",
            "твердых коммунальных отходов", "вывоз отходов", "утилизац",
        ],
    },
    TagEntry {
        tag: "utilities",
        keywords: &[
            "коммунальн", "жку", "жкх", "эксплуатационн", "содержание общего имущества",
        ],
    },
    TagEntry { tag: "cleaning", keywords: &["клининг", "уборк"] },
    TagEntry {
        tag: "labor_safety",
        keywords: &[
            "охрана труда", "охране труда", "охраны труда", "спецоценк", "условий труда",
            "медосмотр", "медицинский осмотр", "медицинских осмотров",
        ],
    },
    TagEntry { tag: "security", keywords: &["охран", "сигнализац", "видеонаблюден"] },
    // Communications and software.
    TagEntry {
        tag: "telecom_mobile",
        keywords: &[
            "мобильная связь", "мобильной связи", "сотов", "мтс", "билайн", "мегафон", "теле2",
            "tele2",
        ],
    },
    TagEntry {
        tag: "internet",
        keywords: &[
            "интернет", "доступ к сети", "передачи данных", "телематическ",
        ],
    },
    TagEntry { tag: "telephony", keywords: &["услуги связи", "услуг связи", "телефон"] },
    TagEntry { tag: "hosting", keywords: &["хостинг", "сервер", "vps", "облачн", "домен"] },
    TagEntry {
        tag: "edo_services",
        keywords: &[
            "электронная подпись", "электронной подписи", "эцп", "электронный документооборот",
            "электронного документооборота", "эдо", "диадок", "сбис", "контур",
        ],
    },
    TagEntry {
        tag: "cash_register",
        keywords: &[
            "онлайн-касс", "фискальн", "офд", "ккт", "кассового аппарата", "контрольно-кассов",
        ],
    },
    TagEntry {
        tag: "software_license",
        keywords: &[
            "лицензи", "программн", "подписк", "1с", "saas",
        ],
    },
    TagEntry {
        tag: "it_services",
        keywords: &[
            "разработк", "техническая поддержка", "технической поддержки", "техподдержк",
            "доработк", "внедрени", "it-услуг", "ит-услуг",
        ],
    },
    TagEntry {
        tag: "advertising",
        keywords: &[
            "реклам", "продвижени", "яндекс.директ", "яндекс директ", "маркетингов", "seo",
            "таргет",
        ],
    },
    // Professional services.
    TagEntry { tag: "printing", keywords: &["полиграф", "типограф", "визитк", "баннер", "печать"] },
    TagEntry {
        tag: "legal_services",
        keywords: &[
            "юридическ", "юрист", "адвокат", "нотари", "правов",
        ],
    },
    TagEntry { tag: "accounting_services", keywords: &["бухгалтер", "аудит"] },
    TagEntry { tag: "consulting", keywords: &["консультац", "консалтинг"] },
    TagEntry {
        tag: "recruitment",
        keywords: &[
            "подбор персонал", "подбору персонал", "рекрутинг", "headhunter", "hh.ru",
            "размещение ваканс",
        ],
    },
    TagEntry {
        tag: "training",
        keywords: &[
            "обучени", "курсы", "курсов", "курса", "семинар", "тренинг", "повышение квалификац",
            "повышения квалификац", "вебинар",
        ],
    },
    TagEntry { tag: "events", keywords: &["конференц", "выставк", "форум"] },
    TagEntry {
        tag: "translation",
        keywords: &[
            "перевод документ", "перевода документ", "переводческ", "устный перевод",
            "письменный перевод",
        ],
    },
    TagEntry { tag: "medical", keywords: &["медицинск", "клиник", "стоматолог"] },
    TagEntry {
        tag: "representation",
        keywords: &[
            "представительск", "банкет", "корпоратив", "подарк", "сувенир",
        ],
    },
    TagEntry { tag: "charity", keywords: &["благотворит", "пожертвован", "спонсор"] },
    TagEntry {
        tag: "membership_fees",
        keywords: &[
            "членский взнос", "членские взносы", "членских взносов", "вступительный взнос",
        ],
    },
    // Travel and vehicles.
    TagEntry {
        tag: "travel_tickets",
        keywords: &[
            "авиабилет", "билет", "ж/д", "ржд", "аэрофлот", "перелет", "перелёт",
        ],
    },
    TagEntry {
        tag: "travel_accommodation",
        keywords: &[
            "проживани", "гостиниц", "хостел", "отеле", "отеля", "отелей", "в отель", "апартамент",
        ],
    },
    TagEntry { tag: "taxi", keywords: &["такси", "яндекс.go", "яндекс go", "ситимобил", "uber"] },
    TagEntry {
        tag: "fuel",
        keywords: &[
            "гсм", "топлив", "бензин", "дизел", "азс", "аи-92", "аи-95", "лукойл", "роснефть",
            "газпромнефть",
        ],
    },
    TagEntry {
        tag: "vehicle_maintenance",
        keywords: &[
            "ремонт автомоб", "техобслуживан", "шиномонтаж", "автосервис", "автомойк",
            "запчасти для авто",
        ],
    },
    TagEntry {
        tag: "parking_tolls",
        keywords: &[
            "парковк", "стоянк", "платная дорога", "платной дороги", "платон", "автодор",
        ],
    },
    TagEntry {
        tag: "vehicle_purchase",
        keywords: &[
            "покупка автомоб", "приобретение автомоб", "купли-продажи автомоб",
            "транспортного средства", "транспортное средство",
        ],
    },
    TagEntry {
        tag: "real_estate_purchase",
        keywords: &[
            "купли-продажи недвиж", "приобретение недвиж", "покупка недвиж",
            "приобретение помещени", "покупка помещени", "купли-продажи нежил",
        ],
    },
    // Goods, materials and work.
    TagEntry {
        tag: "logistics_delivery",
        keywords: &[
            "доставк", "грузоперевоз", "перевозк", "экспедир", "логистическ", "курьер", "сдэк",
            "cdek", "деловые линии", "почта россии", "почтов", "транспортн",
        ],
    },
    TagEntry {
        tag: "equipment_repair",
        keywords: &[
            "ремонт оборудован", "ремонт техники", "ремонт оргтехник", "обслуживание оборудован",
            "заправка картридж", "ремонт компьютер",
        ],
    },
    TagEntry {
        tag: "construction_repair",
        keywords: &[
            "строительн", "ремонтн", "ремонт помещени", "отделочн", "монтаж", "подряд",
        ],
    },
    TagEntry {
        tag: "equipment_purchase",
        keywords: &[
            "оборудовани", "станок", "станка", "компьютер", "ноутбук", "оргтехник", "мебел",
        ],
    },
    TagEntry {
        tag: "office_supplies",
        keywords: &[
            "канц", "бумага", "бумаги", "хозтовар", "хозяйственн", "расходные материалы",
            "расходных материалов", "картридж",
        ],
    },
    TagEntry {
        tag: "food_catering",
        keywords: &[
            "питани", "продуктов питания", "продукты питания", "кейтеринг", "бизнес-ланч", "обедов",
            "кофе", "питьевая вода", "питьевой воды", "бутилированн",
        ],
    },
    TagEntry {
        tag: "materials",
        keywords: &[
            "материал", "сырь", "комплектующ", "запчаст", "запасных частей",
        ],
    },
    TagEntry {
        tag: "sales_revenue",
        keywords: &[
            "выручк", "реализаци", "от покупател", "от заказчик",
        ],
    },
    TagEntry {
        tag: "customer_prepayment",
        keywords: &[
            "предоплат", "авансовый платеж", "авансовый платёж", "аванс по договор", "аванс за",
        ],
    },
    TagEntry {
        tag: "goods_purchase",
        keywords: &[
            "за товар", "поставк", "товарн", "упд", "накладн", "закупк",
        ],
    },
    TagEntry {
        tag: "services_other",
        keywords: &[
            "услуг", "выполненные работы", "выполненных работ", "оказанные", "оказанных",
        ],
    },
];
