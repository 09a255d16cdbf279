//! News Dataset
//!
//! Fixed list of news highlights shown on the news page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub id: u32,
    pub image: &'static str,
    pub desc: &'static str,
}

pub static NEWS_ITEMS: [NewsItem; 11] = [
    NewsItem {
        id: 1,
        image: "/asset/news/img-1.jpeg",
        desc: "Tanha Pola Celebration at Future Podar Learn School\nChildren dressed as farmers and brought decorated toy bulls to celebrate Tanha Pola, honoring farmers and agricultural traditions through cultural activities.",
    },
    NewsItem { id: 2, image: "/asset/news/img-2.jpeg", desc: "Annual sports day celebrates student achievements" },
    NewsItem { id: 3, image: "/asset/news/img-3.jpeg", desc: "New science lab inaugurated with modern equipment" },
    NewsItem { id: 4, image: "/asset/news/img-4.jpeg", desc: "School hosts interscholastic debate competition successfully" },
    NewsItem { id: 5, image: "/asset/news/img-5.jpeg", desc: "School visit from education board representatives" },
    NewsItem { id: 6, image: "/asset/news/img-6.jpeg", desc: "Students participate in national coding challenge" },
    NewsItem { id: 7, image: "/asset/news/img-7.jpeg", desc: "Community outreach program helps local families" },
    NewsItem { id: 8, image: "/asset/news/img-8.jpeg", desc: "Inter-school music festival showcases talent" },
    NewsItem { id: 9, image: "/asset/news/img-9.jpeg", desc: "Alumni meet celebrates decades of success" },
    NewsItem { id: 10, image: "/asset/news/img-10.jpeg", desc: "Teachers attend professional development workshop" },
    NewsItem { id: 11, image: "/asset/news/img-11.jpeg", desc: "New library resources added for students" },
];

impl NewsItem {
    pub fn alt_text(&self) -> String {
        format!("news-{}", self.id)
    }
}
