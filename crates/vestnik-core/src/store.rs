//! Immutable in-memory content store.
//!
//! The store is established once at startup from a fixed seed list. There is
//! no create/update/delete path.

use std::collections::HashSet;

use anyhow::{Result, bail};

use crate::models::{NewsItem, NewsType};

/// Fixed list of news items, unique by id.
#[derive(Debug, Clone)]
pub struct NewsStore {
    items: Vec<NewsItem>,
}

impl NewsStore {
    /// Creates a store from the given items, preserving their order.
    ///
    /// # Errors
    /// Returns an error if two items share the same id.
    pub fn new(items: Vec<NewsItem>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                bail!("Duplicate news item id '{}'", item.id);
            }
        }
        Ok(Self { items })
    }

    /// Builds the store from the built-in seed list.
    pub fn seed() -> Self {
        Self {
            items: seed_items(),
        }
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NewsStore {
    fn default() -> Self {
        Self::seed()
    }
}

struct Seed {
    id: &'static str,
    kind: NewsType,
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    image: &'static str,
    author: &'static str,
    date: &'static str,
    featured: bool,
    views: u64,
}

const SEED: &[Seed] = &[
    Seed {
        id: "1",
        kind: NewsType::News,
        title: "Экологическая инициатива набирает обороты в регионе",
        excerpt: "Местные власти объявили о масштабной программе озеленения городских районов с акцентом на создание зеленых коридоров.",
        category: "Экология",
        image: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800",
        author: "Мария Зеленова",
        date: "15 ноября 2025",
        featured: true,
        views: 2840,
    },
    Seed {
        id: "2",
        kind: NewsType::Article,
        title: "Как изменилась городская среда за последние 5 лет",
        excerpt: "Аналитический обзор трансформации общественных пространств и их влияния на качество жизни горожан.",
        category: "Аналитика",
        image: "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?w=600",
        author: "Игорь Петров",
        date: "14 ноября 2025",
        featured: false,
        views: 1520,
    },
    Seed {
        id: "3",
        kind: NewsType::Video,
        title: "Репортаж: Зеленая энергетика в действии",
        excerpt: "Эксклюзивный видеоматериал о работе солнечной электростанции и её вкладе в устойчивое развитие.",
        category: "Видео",
        image: "https://images.unsplash.com/photo-1473341304170-971dccb5ac1e?w=600",
        author: "Анна Ветрова",
        date: "14 ноября 2025",
        featured: false,
        views: 3120,
    },
    Seed {
        id: "4",
        kind: NewsType::Photo,
        title: "Фоторепортаж: Осенние краски парка Победы",
        excerpt: "Уникальная подборка снимков, запечатлевших золотую осень в самом сердце города.",
        category: "Фоторепортаж",
        image: "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=600",
        author: "Дмитрий Светов",
        date: "13 ноября 2025",
        featured: false,
        views: 980,
    },
    Seed {
        id: "5",
        kind: NewsType::Poster,
        title: "Фестиваль экологического кино пройдет 20-22 ноября",
        excerpt: "Три дня документального кино о природе, климате и устойчивом будущем планеты.",
        category: "Афиша",
        image: "https://images.unsplash.com/photo-1478720568477-152d9b164e26?w=600",
        author: "Редакция",
        date: "13 ноября 2025",
        featured: false,
        views: 650,
    },
    Seed {
        id: "6",
        kind: NewsType::Weather,
        title: "Прогноз погоды на выходные: солнечно и тепло",
        excerpt: "Синоптики обещают комфортную погоду для осенних прогулок. Температура до +15°C.",
        category: "Погода",
        image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=600",
        author: "Метеослужба",
        date: "15 ноября 2025",
        featured: false,
        views: 1840,
    },
    Seed {
        id: "7",
        kind: NewsType::News,
        title: "Новый велопарк открылся в Заречном районе",
        excerpt: "Современная инфраструктура для велосипедистов включает трассы разной сложности и зоны отдыха.",
        category: "Спорт",
        image: "https://images.unsplash.com/photo-1534067783941-51c9c23ecefd?w=600",
        author: "Олег Быстров",
        date: "12 ноября 2025",
        featured: false,
        views: 1210,
    },
    Seed {
        id: "8",
        kind: NewsType::Article,
        title: "Интервью с архитектором зеленых зданий",
        excerpt: "Разговор о будущем экологичной архитектуры и принципах проектирования устойчивых городов.",
        category: "Интервью",
        image: "https://images.unsplash.com/photo-1487958449943-2429e8be8625?w=600",
        author: "Елена Строева",
        date: "11 ноября 2025",
        featured: false,
        views: 890,
    },
];

fn seed_items() -> Vec<NewsItem> {
    SEED.iter()
        .map(|s| NewsItem {
            id: s.id.to_string(),
            kind: s.kind,
            title: s.title.to_string(),
            excerpt: s.excerpt.to_string(),
            category: s.category.to_string(),
            image: s.image.to_string(),
            author: s.author.to_string(),
            date: s.date.to_string(),
            featured: s.featured,
            views: Some(s.views),
        })
        .collect()
}
