//! Content pages and their state

use serde::{Deserialize, Serialize};

/// Pages the content region can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Materi,
    Khs,
    Profil,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Materi => "Materi Kuliah",
            Route::Khs => "Kartu Hasil Studi",
            Route::Profil => "Profil Mahasiswa",
        }
    }
}

/// A course material entry shown on the Materi page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: u32,
    pub judul: String,
    pub minggu: u32,
}

/// Which profile field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Nim,
    Email,
}

/// Editable profile form (NIM and email)
#[derive(Debug, Clone)]
pub struct ProfileForm {
    pub nim: String,
    pub email: String,
    pub field: ProfileField,
    /// Typed characters go into the focused field while editing
    pub editing: bool,
}

impl ProfileForm {
    pub fn new(nim: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            nim: nim.into(),
            email: email.into(),
            field: ProfileField::Nim,
            editing: false,
        }
    }

    pub fn input(&mut self, c: char) {
        match self.field {
            ProfileField::Nim => self.nim.push(c),
            ProfileField::Email => self.email.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            ProfileField::Nim => {
                self.nim.pop();
            }
            ProfileField::Email => {
                self.email.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_input_targets_focused_field() {
        let mut form = ProfileForm::new("22001000", "a@b.co");

        form.field = ProfileField::Nim;
        form.input('1');
        assert_eq!(form.nim, "220010001");

        form.field = ProfileField::Email;
        form.backspace();
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.nim, "220010001");
    }
}
