pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

impl FooterItem {
    pub const fn new(key: &'static str, desc: &'static str) -> Self {
        Self {
            key,
            desc,
            highlighted: false,
        }
    }

    pub const fn highlighted(mut self, on: bool) -> Self {
        self.highlighted = on;
        self
    }
}
