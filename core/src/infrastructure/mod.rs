pub mod db;
pub mod documents;

pub mod discipline {
    pub mod mappers;
}

pub mod equipment {
    pub mod mappers;
}

pub mod lesson {
    pub mod mappers;
}

pub mod record {
    pub mod mappers;
}

pub mod room {
    pub mod mappers;
}
