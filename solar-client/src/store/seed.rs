use time::macros::{date, datetime};

use super::Seed;
use crate::domain::{
    AccountStatus, AlertCategory, AlertEvent, CustomerRecord, DailySample, EquipmentStatus,
    MonthlySample,
};

/// The demo portfolio the dashboard ships with.
pub fn builtin() -> Seed {
    Seed {
        customers: customers(),
        daily: daily(),
        monthly: monthly(),
        alerts: alerts(),
    }
}

fn customers() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord {
            id: "1".to_string(),
            name: "João Silva".to_string(),
            email: "joao@email.com".to_string(),
            phone: "(11) 99999-9999".to_string(),
            address: "Rua das Flores, 123, São Paulo".to_string(),
            account_status: AccountStatus::Active,
            equipment_status: EquipmentStatus::Active,
            consumption_kwh: 850.0,
            generation_kwh: 1200.0,
            last_reading: datetime!(2024-01-09 14:30),
        },
        CustomerRecord {
            id: "2".to_string(),
            name: "Maria Santos".to_string(),
            email: "maria@email.com".to_string(),
            phone: "(11) 88888-8888".to_string(),
            address: "Av. Central, 456, São Paulo".to_string(),
            account_status: AccountStatus::Active,
            equipment_status: EquipmentStatus::Offline,
            consumption_kwh: 950.0,
            generation_kwh: 890.0,
            last_reading: datetime!(2024-01-08 16:45),
        },
        CustomerRecord {
            id: "3".to_string(),
            name: "Pedro Costa".to_string(),
            email: "pedro@email.com".to_string(),
            phone: "(11) 77777-7777".to_string(),
            address: "Rua do Sol, 789, São Paulo".to_string(),
            account_status: AccountStatus::Active,
            equipment_status: EquipmentStatus::Maintenance,
            consumption_kwh: 720.0,
            generation_kwh: 1150.0,
            last_reading: datetime!(2024-01-09 12:15),
        },
        CustomerRecord {
            id: "4".to_string(),
            name: "Ana Oliveira".to_string(),
            email: "ana@email.com".to_string(),
            phone: "(11) 66666-6666".to_string(),
            address: "Rua Verde, 321, São Paulo".to_string(),
            account_status: AccountStatus::Inactive,
            equipment_status: EquipmentStatus::Active,
            consumption_kwh: 680.0,
            generation_kwh: 820.0,
            last_reading: datetime!(2024-01-05 10:20),
        },
        CustomerRecord {
            id: "5".to_string(),
            name: "Carlos Mendes".to_string(),
            email: "carlos@email.com".to_string(),
            phone: "(11) 55555-5555".to_string(),
            address: "Av. Energia, 654, São Paulo".to_string(),
            account_status: AccountStatus::Active,
            equipment_status: EquipmentStatus::Active,
            consumption_kwh: 1100.0,
            generation_kwh: 1380.0,
            last_reading: datetime!(2024-01-09 15:10),
        },
    ]
}

fn daily() -> Vec<DailySample> {
    [
        (date!(2024 - 01 - 01), 45.0, 38.0),
        (date!(2024 - 01 - 02), 52.0, 42.0),
        (date!(2024 - 01 - 03), 48.0, 35.0),
        (date!(2024 - 01 - 04), 55.0, 40.0),
        (date!(2024 - 01 - 05), 43.0, 39.0),
        (date!(2024 - 01 - 06), 38.0, 45.0),
        (date!(2024 - 01 - 07), 50.0, 37.0),
        (date!(2024 - 01 - 08), 47.0, 41.0),
        (date!(2024 - 01 - 09), 53.0, 36.0),
    ]
    .into_iter()
    .map(|(date, generation_kwh, consumption_kwh)| DailySample {
        date,
        generation_kwh,
        consumption_kwh,
    })
    .collect()
}

fn monthly() -> Vec<MonthlySample> {
    [
        ("Jul/23", 180.0, 160.0),
        ("Aug/23", 195.0, 155.0),
        ("Sep/23", 210.0, 150.0),
        ("Oct/23", 225.0, 165.0),
        ("Nov/23", 240.0, 170.0),
        ("Dec/23", 235.0, 180.0),
        ("Jan/24", 250.0, 175.0),
    ]
    .into_iter()
    .map(|(month, generation_kwh, consumption_kwh)| MonthlySample {
        month: month.to_string(),
        generation_kwh,
        consumption_kwh,
    })
    .collect()
}

fn alerts() -> Vec<AlertEvent> {
    vec![
        AlertEvent {
            id: "1".to_string(),
            customer_id: "2".to_string(),
            category: AlertCategory::Offline,
            message: "System offline for 2 hours".to_string(),
            timestamp: datetime!(2024-01-09 14:30),
        },
        AlertEvent {
            id: "2".to_string(),
            customer_id: "3".to_string(),
            category: AlertCategory::Maintenance,
            message: "Scheduled maintenance started".to_string(),
            timestamp: datetime!(2024-01-09 08:00),
        },
    ]
}
